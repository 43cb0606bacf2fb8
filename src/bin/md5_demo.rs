use std::env;
use std::io::{self, Write};

use md5_stream::md5_hex;

fn main() {
    // Hash the first argument, or a fixed sample string when none is given.
    let input = env::args().nth(1).unwrap_or_else(|| String::from("Hola"));

    let hex = md5_hex(input.as_bytes());

    // The digest is the whole output: no trailing newline.
    print!("{hex}");
    let _ = io::stdout().flush();
}
