use clap::Parser;
use std::io;

fn main() {
    env_logger::init();

    let args = rusty_spriteconv::spriteconvlib::Cli::parse();
    let other_config = rusty_spriteconv::spriteconvlib::Config{stdout_writer: io::stdout()};

    if let Err(e) = rusty_spriteconv::spriteconvlib::run(args, other_config) {
        println!("Error: {}", e);
        std::process::exit(1);
    }
}
