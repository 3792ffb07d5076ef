#![allow(dead_code)]

use case_detection::CaseDetection;

#[derive(CaseDetection)]
struct Point {
    x: i32,
    y: i32,
}

fn main() {}
