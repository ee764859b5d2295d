#![allow(dead_code)]
use specimen_core::Describe;

#[derive(Describe)]
union Number {
    int: u32,
    float: f32,
}

fn main() {}
