#![allow(dead_code)]
use specimen_core::Describe;

#[derive(Describe)]
struct UserVo {
    #[specimen(example = "1001")]
    id: String,
}

fn main() {}
