pub mod converter;

pub mod spriteconvlib;
