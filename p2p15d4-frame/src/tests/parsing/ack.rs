use crate::*;

use std::string::ToString;

#[test]
fn parse_imm_ack() {
    let frame = [0x05, 0x02, 0x10, 0x2a, 0xd8, 0x50];
    let report = FrameReport::parse(&frame).unwrap();

    assert_eq!(report.frame_control.frame_type, FrameType::Ack);
    assert_eq!(
        report.frame_control.frame_version,
        FrameVersion::Ieee802154_2006
    );
    assert_eq!(
        report.content,
        FrameContent::ImmAck {
            sequence_number: 0x2a,
            link_quality: LinkQuality { rssi: -40, lqi: 0x50 },
        }
    );

    let text = report.to_string();
    assert!(text.contains("Frame type:                   Imm-ACK\n"));
    assert!(text.contains("------ Imm-ACK Packet ------\nSequence number: 42\n"));
    assert!(text.contains("RSSI: -40\nLQI: 80\n"));
}

#[test]
fn parse_imm_ack_2003() {
    let frame = [0x05, 0x02, 0x00, 0xff, 0x00, 0x00];
    let report = FrameReport::parse(&frame).unwrap();

    assert!(matches!(
        report.content,
        FrameContent::ImmAck {
            sequence_number: 0xff,
            ..
        }
    ));
}

#[test]
fn parse_enhanced_ack() {
    // Enhanced Ack built for a 2015 frame from 0x0003 to 0x0002 in PAN 0x0001.
    let frame = hex::decode("0c42a8070100030002000000b4").unwrap();
    let report = FrameReport::parse(&frame).unwrap();

    let FrameContent::EnhancedAck(body) = report.content else {
        panic!("not an enhanced ack");
    };
    assert_eq!(body.sequence_number, Some(7));
    assert_eq!(body.addressing.dst_address, Address::Short(0x0003));
    assert_eq!(body.addressing.src_address, Address::Short(0x0002));
    assert!(body.payload.is_empty());

    let text = report.to_string();
    assert!(text.contains("------ Enh-ACK Packet ------\n"));
    assert!(text.contains("ACK contains no data.\n"));
    assert!(!text.contains("Data dump"));
}

#[test]
fn parse_enhanced_ack_with_data() {
    let frame = hex::decode("0f42a807010003000200414b4300c4b4").unwrap();
    let report = FrameReport::parse(&frame).unwrap();

    let FrameContent::EnhancedAck(body) = report.content else {
        panic!("not an enhanced ack");
    };
    assert_eq!(body.payload, b"AKC");

    let text = report.to_string();
    assert!(text.contains("ACK contains data.\nData length: 3\nData dump: 41 4b 43 "));
}
