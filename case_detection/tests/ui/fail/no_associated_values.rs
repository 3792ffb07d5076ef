#![allow(dead_code)]

use case_detection::CaseDetection;

#[derive(Debug, CaseDetection)]
enum Direction {
    North,
    South,
}

fn main() {}
