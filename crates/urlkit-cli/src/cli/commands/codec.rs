//! `urlkit encode|decode <text>` – percent-encoding.

use urlkit_core::encoding;

pub fn run_encode(text: &str) {
    println!("{}", encoding::encode(text));
}

pub fn run_decode(text: &str) {
    println!("{}", encoding::decode(text));
}
