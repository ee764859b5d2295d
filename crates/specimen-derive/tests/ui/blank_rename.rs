#![allow(dead_code)]
use specimen_core::Describe;

#[derive(Describe)]
struct Person {
    #[specimen(rename = " ")]
    name: String,
}

fn main() {}
