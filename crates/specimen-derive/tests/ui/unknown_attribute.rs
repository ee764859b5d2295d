#![allow(dead_code)]
use specimen_core::Describe;

#[derive(Describe)]
struct Person {
    #[specimen(format = "email")]
    contact: String,
}

fn main() {}
