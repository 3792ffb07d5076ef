#![allow(dead_code)]

use case_detection::CaseDetection;

#[derive(CaseDetection)]
enum Never {}

fn main() {}
