#![allow(dead_code)]

use case_detection::CaseDetection;

#[derive(CaseDetection)]
enum Wrapper<T> {
    Value(T),
}

fn main() {}
