#![allow(dead_code)]
use specimen_core::Describe;

#[derive(Describe)]
struct Admin {
    #[specimen(extends)]
    user: User,
    #[specimen(extends)]
    role: Role,
}

struct User;
struct Role;

fn main() {}
