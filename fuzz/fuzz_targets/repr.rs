#![no_main]

use p2p15d4_frame::{DataFrameRepr, DataHeaderRepr, FrameContent, FrameReport, MAX_FRAME_LEN};

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (DataHeaderRepr, Vec<u8>)| {
    let (header, payload) = input;
    let frame = DataFrameRepr::new(header, &payload);

    let mut tx = [0u8; MAX_FRAME_LEN];
    let Ok(len) = frame.emit(&mut tx) else {
        return;
    };

    // The receiver drops the FCS and appends a filler byte, RSSI and LQI.
    let mut rx = vec![(tx[0] + 1) as u8];
    rx.extend_from_slice(&tx[1..len]);
    rx.extend_from_slice(&[0x00, 0x00, 0x00]);

    let report = FrameReport::parse(&rx).unwrap();
    assert_eq!(report.frame_control, header.frame_control());

    let FrameContent::Data(body) = report.content else {
        panic!("not a data frame");
    };
    assert_eq!(body.sequence_number, header.sequence_number);
    assert_eq!(body.addressing, header.addressing());
    assert_eq!(body.payload, &payload[..]);
});
