use case_detection::CaseDetection;

mod protocol {
    use case_detection::CaseDetection;

    #[derive(Debug, CaseDetection)]
    pub enum Frame {
        Data(Vec<u8>),
        Ping(u64),
        Close,
    }
}

#[derive(CaseDetection)]
enum Local {
    Only(&'static str),
}

fn main() {
    let frame = protocol::Frame::Ping(1);
    assert!(frame.is_case(protocol::FrameCase::Ping));
    assert_eq!(frame.associated_value::<u64>(), Some(1));

    let local = Local::Only("x");
    assert!(local.is_case(LocalCase::Only));
    assert_eq!(local.associated_value::<&'static str>(), Some("x"));
}
