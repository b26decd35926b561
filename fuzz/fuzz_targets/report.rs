#![no_main]

use p2p15d4_frame::FrameReport;

use libfuzzer_sys::{fuzz_target, Corpus};

fuzz_target!(|data: &[u8]| -> Corpus {
    if data.len() > 128 {
        return Corpus::Reject;
    }

    if let Ok(report) = FrameReport::parse(data) {
        let _ = report.to_string();
    }

    Corpus::Keep
});
