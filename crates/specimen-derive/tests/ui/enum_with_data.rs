#![allow(dead_code)]
use specimen_core::Describe;

#[derive(Describe)]
enum Shape {
    Square,
    Circle(f64),
}

fn main() {}
