#![allow(dead_code)]
use specimen_core::Describe;

#[derive(Describe)]
struct Pair(String, i32);

fn main() {}
