use crate::*;

use std::string::ToString;

const HALLO: [u8; 18] = [
    0x11, 0x61, 0xa8, 0x07, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x48, 0x61, 0x6c, 0x6c, 0x6f,
    0x00, 0xc4, 0x78,
];

#[test]
fn parse_data_frame() {
    let report = FrameReport::parse(&HALLO).unwrap();

    let fc = report.frame_control;
    assert_eq!(fc.frame_type, FrameType::Data);
    assert!(!fc.security_enabled);
    assert!(!fc.frame_pending);
    assert!(fc.ack_request);
    assert!(fc.pan_id_compression);
    assert_eq!(fc.dst_addressing_mode, AddressingMode::Short);
    assert_eq!(fc.frame_version, FrameVersion::Ieee802154_2015);
    assert_eq!(fc.src_addressing_mode, AddressingMode::Short);

    let FrameContent::Data(body) = report.content else {
        panic!("not a data frame");
    };
    assert_eq!(body.sequence_number, Some(7));
    assert_eq!(body.addressing.dst_pan_id, Some(0x0001));
    assert_eq!(body.addressing.dst_address, Address::Short(0x0002));
    assert_eq!(body.addressing.src_pan_id, None);
    assert_eq!(body.addressing.src_address, Address::Short(0x0003));
    assert_eq!(body.payload, b"Hallo");
    assert_eq!(body.link_quality, LinkQuality { rssi: -60, lqi: 120 });
    assert_eq!(report.link_quality(), Some(body.link_quality));
}

#[test]
fn parse_data_frame_extended_2003() {
    let frame = hex::decode("1941cc01cdabc7d9b514004b120010238cfe3aff5560aa00b0d4").unwrap();
    let report = FrameReport::parse(&frame).unwrap();

    let FrameContent::Data(body) = report.content else {
        panic!("not a data frame");
    };
    assert_eq!(report.frame_control.frame_version, FrameVersion::Ieee802154_2003);
    assert_eq!(body.sequence_number, Some(1));
    assert_eq!(body.addressing.dst_pan_id, Some(0xabcd));
    assert_eq!(
        body.addressing.dst_address,
        Address::Extended([0x00, 0x12, 0x4b, 0x00, 0x14, 0xb5, 0xd9, 0xc7])
    );
    assert_eq!(
        body.addressing.src_address,
        Address::Extended([0x10, 0x23, 0x8c, 0xfe, 0x3a, 0xff, 0x55, 0x60])
    );
    assert_eq!(body.payload, &[0xaa]);
    assert_eq!(body.link_quality, LinkQuality { rssi: -80, lqi: 0xd4 });
}

#[test]
fn parse_suppressed_sequence_number() {
    let frame = hex::decode("0b41a901000200030000c478").unwrap();
    let report = FrameReport::parse(&frame).unwrap();

    let FrameContent::Data(body) = report.content else {
        panic!("not a data frame");
    };
    assert_eq!(body.sequence_number, None);
    assert!(body.payload.is_empty());
}

#[test]
fn header_past_end_of_frame() {
    // The length prefix ends the frame inside the source address.
    let frame = hex::decode("0a41880701000200030000c478").unwrap();
    assert_eq!(FrameReport::parse(&frame), Err(Error::BufferTooShort));
}

#[test]
fn display_data_frame() {
    let text = FrameReport::parse(&HALLO).unwrap().to_string();

    let expected = [
        "------ Frame Control Field ------",
        "Frame type:                   Data",
        "Acknowledge request:          True",
        "PAN ID Compression:           True",
        "Sequence Number Suppression:  False",
        "Frame version:                2015",
        "------ Data Packet ------",
        "Sequence number: 7",
        "DST PAN: 00:01",
        "DST ADDR: 00:02",
        "SRC PAN: 00:01 (intra PAN)",
        "SRC ADDR: 00:03",
        "Data length: 5",
        "----- Transmission Info -----",
        "RSSI: -60",
        "LQI: 120",
    ];

    let mut lines = text.lines();
    for line in expected {
        assert!(lines.any(|l| l == line), "missing {line:?} in\n{text}");
    }

    assert!(text.starts_with("-----------------"));
    assert!(text.contains(&format!("Data dump: 48 61 6c 6c 6f {}|Hallo|\n", " ".repeat(21))));
    assert!(!text.contains("Reserved bit is set"));
}

#[test]
fn display_broadcast_and_inter_pan() {
    let local = hex::decode("0e0188010100ffff0500030000c478").unwrap();
    let text = FrameReport::parse(&local).unwrap().to_string();
    assert!(text.contains("DST ADDR: ff:ff (local Broadcast)\n"));
    assert!(text.contains("SRC PAN: 00:05 (inter PAN)\n"));

    let global = hex::decode("0e018801ffffffff0500030000c478").unwrap();
    let text = FrameReport::parse(&global).unwrap().to_string();
    assert!(text.contains("DST ADDR: ff:ff (global Broadcast)\n"));
}

#[test]
fn display_extended_addresses() {
    let frame = hex::decode("1941cc01cdabc7d9b514004b120010238cfe3aff5560aa00b0d4").unwrap();
    let text = FrameReport::parse(&frame).unwrap().to_string();

    assert!(text.contains("DST ADDR: 00:12:4b:00:14:b5:d9:c7\n"));
    assert!(text.contains("SRC ADDR: 60:55:ff:3a:fe:8c:23:10\n"));
}

#[test]
fn display_reserved_bit() {
    let frame = hex::decode("0c c1a8 07 0100 0200 0300 00 c4 78".replace(' ', "")).unwrap();
    let text = FrameReport::parse(&frame).unwrap().to_string();
    assert!(text.contains("Reserved:                     True\n"));
    assert!(text.contains("Reserved bit is set...\n"));
}

#[test]
fn hexdump_lines() {
    let data: std::vec::Vec<u8> = (0x41..0x41 + 14).collect();
    let text = HexDump(&data).to_string();
    let mut lines = text.lines();

    assert_eq!(
        lines.next(),
        Some("Data dump: 41 42 43 44 45 46 47 48 49 4a 4b 4c |ABCDEFGHIJKL|")
    );
    assert_eq!(
        lines.next(),
        Some(format!("           4d 4e {}|MN|", " ".repeat(30)).as_str())
    );
    assert_eq!(lines.next(), None);

    assert_eq!(HexDump(&[0x00, 0x7f, 0x20]).to_string().split('|').nth(1), Some(".. "));
}
