#![allow(dead_code)]

use case_detection::CaseDetection;

#[derive(CaseDetection)]
#[case_detection(krate = "::case_detection")]
enum Token {
    Word(String),
}

fn main() {}
