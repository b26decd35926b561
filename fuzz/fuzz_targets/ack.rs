#![no_main]

use p2p15d4_frame::{build_enhanced_ack, FrameReport, FrameType, MAX_ENHANCED_ACK_LEN};

use libfuzzer_sys::{fuzz_target, Corpus};

fuzz_target!(|data: &[u8]| -> Corpus {
    if data.len() > 128 {
        return Corpus::Reject;
    }

    let mut ack = [0u8; MAX_ENHANCED_ACK_LEN + 3];
    let Ok(len) = build_enhanced_ack(data, &mut ack) else {
        return Corpus::Keep;
    };
    assert!(len <= MAX_ENHANCED_ACK_LEN);

    // Append the filler, RSSI and LQI the receiver adds, dropping the FCS
    // the length prefix accounts for.
    let length = ack[0] as usize;
    let mut received = [0u8; MAX_ENHANCED_ACK_LEN + 3];
    received[0] = (length + 1) as u8;
    received[1..length - 1].copy_from_slice(&ack[1..length - 1]);

    if let Ok(report) = FrameReport::parse(&received[..length + 2]) {
        assert_eq!(report.frame_control.frame_type, FrameType::Ack);
    }

    Corpus::Keep
});
