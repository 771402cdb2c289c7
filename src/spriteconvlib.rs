use clap::Parser;
use std::error::Error;
use std::io::Write;

use crate::converter;
use crate::converter::render::{self, ArrayStyle};

pub const USAGE: &str = "Usage: spriteconv [--style csharp|c|rust] [--name IDENT] <path_to_16x16_image_file>
Example: spriteconv ./pixil-frame-0.png
";

/// Converts a 16x16 sprite image into an array of 16 bit row masks,
/// a pixel is on when its alpha is at least 128
#[derive(Parser)]
pub struct Cli {
    /// The path to the 16x16 image
    #[clap(parse(from_os_str))]
    pub image: Option<std::path::PathBuf>,

    /// Syntax of the generated array declaration
    #[clap(long, arg_enum, default_value = "csharp")]
    pub style: ArrayStyle,

    /// Identifier for the generated array, defaults to one suiting the style
    #[clap(long)]
    pub name: Option<String>,
}

pub struct Config<J: Write> {
    pub stdout_writer: J, // receives the usage text or the array declaration
}

pub fn run<J: Write>(cli_config: Cli, mut other_config: Config<J>) -> Result<(), Box<dyn Error>> {
    let path = match cli_config.image {
        Some(path) => path,
        None => {
            other_config.stdout_writer.write_all(USAGE.as_bytes())?;
            return Ok(());
        },
    };

    log::info!("converting {}", path.display());

    let result = converter::convert(path.as_path())?;

    log::debug!("rendering {} rows as {:?}", result.rows.len(), cli_config.style);
    let text = render::render(&result, cli_config.style, cli_config.name.as_deref());

    other_config.stdout_writer.write_all(text.as_bytes())?;
    other_config.stdout_writer.flush()?;

    return Ok(());
}
