mod outer {
    use case_detection::CaseDetection;

    #[derive(CaseDetection)]
    pub(crate) enum Job {
        Queued(u32),
        Running { pid: u32, attempt: u8 },
        Done,
    }

    pub(crate) fn check() {
        let job = Job::Running { pid: 10, attempt: 2 };
        assert!(job.is_case(JobCase::Running));
        assert!(!job.is_case(JobCase::Done));
        assert_eq!(job.associated_value::<(u32, u8)>(), Some((10, 2)));
        assert_eq!(Job::Done.associated_value::<u32>(), None);
        assert_eq!(Job::Queued(4).associated_value::<u32>(), Some(4));
    }
}

fn main() {
    outer::check();
}
