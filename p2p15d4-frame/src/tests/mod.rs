use super::*;

use std::vec::Vec;

mod parsing;

/// Turn a transmit buffer into the buffer the receiver delivers for it: the
/// frame followed by a filler byte, the RSSI and the LQI.
///
/// The transmitter counts header, payload and FCS. The receiver counts one
/// byte more, and that extra byte reads as zero just before the RSSI. This
/// mirrors the length the radio firmware reports, not a captured trace.
pub(crate) fn as_received(tx: &[u8], rssi: i8, lqi: u8) -> Vec<u8> {
    let length = tx[0] as usize;
    let mut rx = vec![(length + 1) as u8];
    rx.extend_from_slice(&tx[1..length - 1]);
    rx.extend_from_slice(&[0x00, rssi as u8, lqi]);
    rx
}

#[test]
fn received_length_counts_filler() {
    let header = FrameBuilder::new_data_2015()
        .set_sequence_number(3)
        .set_dst(0x0001, Address::Short(0x0002))
        .set_src(0x0001, Address::Short(0x0003))
        .finalize()
        .unwrap();
    let mut tx = [0u8; MAX_FRAME_LEN];
    let tx_len = DataFrameRepr::new(header, b"Hi").emit(&mut tx).unwrap();
    let tx = &tx[..tx_len];

    // No filler on transmit: the prefix is header, payload and FCS.
    assert_eq!(tx[0] as usize, tx_len - 1 + FCS_LEN);

    let rx = as_received(tx, -60, 0x78);
    let length = rx[0] as usize;
    assert_eq!(length, tx[0] as usize + 1);
    assert_eq!(rx.len(), length + 1);
    assert_eq!(&rx[1..length - 2], &tx[1..]);
    assert_eq!(&rx[length - 2..], &[0x00, -60i8 as u8, 0x78]);

    let report = FrameReport::parse(&rx).unwrap();
    let FrameContent::Data(body) = report.content else {
        panic!("expected a data frame");
    };
    assert_eq!(body.payload, b"Hi");
}

const EXT_A: [u8; 8] = [0x00, 0x12, 0x4b, 0x00, 0x14, 0xb5, 0xd9, 0xc7];
const EXT_B: [u8; 8] = [0x60, 0x55, 0xf9, 0xff, 0xfe, 0x3a, 0x8c, 0x10];

#[test]
fn emit_header_example() {
    let header = FrameBuilder::new_data_2015()
        .set_sequence_number(7)
        .set_ack_request(true)
        .set_dst(0x0001, Address::Short(0x0002))
        .set_src(0x0001, Address::Short(0x0003))
        .finalize()
        .unwrap();

    let mut buffer = [0u8; 9];
    assert_eq!(header.emit(&mut buffer), Ok(9));

    let fc = FrameControl::new(&buffer[..2]).unwrap();
    assert_eq!(fc.frame_type(), FrameType::Data);
    assert_eq!(fc.frame_version(), FrameVersion::Ieee802154_2015);
    assert!(fc.pan_id_compression());
    assert!(!fc.sequence_number_suppression());
    assert!(fc.ack_request());
    assert_eq!(fc.dst_addressing_mode(), AddressingMode::Short);
    assert_eq!(fc.src_addressing_mode(), AddressingMode::Short);

    assert_eq!(&buffer[2..], &[0x07, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00]);
}

#[test]
fn emit_data_frame_2003() {
    let header = FrameBuilder::new_data_2003(1)
        .set_dst(0xabcd, Address::BROADCAST)
        .set_src(0xabcd, Address::Extended(EXT_A))
        .finalize()
        .unwrap();
    let frame = DataFrameRepr::new(header, &[0x2b, 0x00, 0x00, 0x00]);

    let mut buffer = vec![0; frame.buffer_len()];
    frame.emit(&mut buffer).unwrap();

    assert_eq!(
        buffer,
        [
            0x15, 0x41, 0xc8, 0x01, 0xcd, 0xab, 0xff, 0xff, 0x00, 0x12, 0x4b, 0x00, 0x14, 0xb5,
            0xd9, 0xc7, 0x2b, 0x00, 0x00, 0x00,
        ]
    );
}

#[test]
fn long_destination_reversed_long_source_verbatim() {
    let raw = [0xb0, 0xb1, 0xb2, 0xb3, 0xb4, 0xb5, 0xb6, 0xb7];
    let mut buffer = [0u8; 32];

    let dst = FrameBuilder::new_data_2003(0)
        .set_dst(0x0001, Address::Extended(raw))
        .set_src(0x0001, Address::Short(0x0003))
        .finalize()
        .unwrap();
    let len = dst.emit(&mut buffer).unwrap();
    assert_eq!(
        &buffer[5..len - 2],
        &[0xb7, 0xb6, 0xb5, 0xb4, 0xb3, 0xb2, 0xb1, 0xb0]
    );

    let src = FrameBuilder::new_data_2003(0)
        .set_dst(0x0001, Address::Short(0x0002))
        .set_src(0x0001, Address::Extended(raw))
        .finalize()
        .unwrap();
    let len = src.emit(&mut buffer).unwrap();
    assert_eq!(&buffer[7..len], &raw);
}

#[test]
fn encode_decode_round_trip() {
    let addresses = [Address::Short(0x1234), Address::Extended(EXT_A)];
    let sources = [Address::Short(0x0003), Address::Extended(EXT_B)];
    let pan_ids = [(0x0001, 0x0001), (0x0001, 0xbeef)];

    let mut checked = 0;

    for frame_version in [FrameVersion::Ieee802154_2003, FrameVersion::Ieee802154_2015] {
        for sequence_number in [Some(0x42), None] {
            if frame_version == FrameVersion::Ieee802154_2003 && sequence_number.is_none() {
                continue;
            }
            for dst_address in addresses {
                for src_address in sources {
                    for (dst_pan_id, src_pan_id) in pan_ids {
                        for ack_request in [true, false] {
                            let header = DataHeaderRepr {
                                frame_version,
                                sequence_number,
                                ack_request,
                                dst_pan_id,
                                dst_address,
                                src_pan_id,
                                src_address,
                            };
                            let frame = DataFrameRepr::new(header, b"p2p");

                            let mut tx = [0u8; MAX_FRAME_LEN];
                            frame.emit(&mut tx).unwrap();
                            let rx = as_received(&tx, -70, 0xff);

                            let report = FrameReport::parse(&rx).unwrap();
                            let fc = report.frame_control;
                            assert_eq!(fc.frame_type, FrameType::Data);
                            assert_eq!(fc.frame_version, frame_version);
                            assert_eq!(fc.ack_request, ack_request);
                            assert_eq!(fc.pan_id_compression, dst_pan_id == src_pan_id);
                            assert_eq!(
                                fc.sequence_number_suppression,
                                sequence_number.is_none()
                            );
                            assert_eq!(fc, header.frame_control());

                            let FrameContent::Data(body) = report.content else {
                                panic!("expected a data frame: {header:?}");
                            };
                            assert_eq!(body.sequence_number, sequence_number);
                            assert_eq!(body.addressing.dst_pan_id, Some(dst_pan_id));
                            assert_eq!(body.addressing.dst_address, dst_address);
                            assert_eq!(body.addressing.effective_src_pan_id(), Some(src_pan_id));
                            assert_eq!(body.addressing.src_address, src_address);
                            assert_eq!(body.payload, b"p2p");
                            assert_eq!(body.link_quality, LinkQuality { rssi: -70, lqi: 0xff });

                            checked += 1;
                        }
                    }
                }
            }
        }
    }

    assert_eq!(checked, 3 * 2 * 2 * 2 * 2);
}

#[test]
fn ack_mirrors_short_addresses() {
    let header = FrameBuilder::new_data_2015()
        .set_sequence_number(9)
        .set_ack_request(true)
        .set_dst(0x0001, Address::Short(0x0002))
        .set_src(0x0001, Address::Short(0x0003))
        .finalize()
        .unwrap();
    let mut tx = [0u8; MAX_FRAME_LEN];
    DataFrameRepr::new(header, b"Hallo").emit(&mut tx).unwrap();
    let rx = as_received(&tx, -50, 0x80);

    let mut ack = [0u8; MAX_ENHANCED_ACK_LEN];
    let len = build_enhanced_ack(&rx, &mut ack).unwrap();

    let ack_rx = as_received(&ack[..len], -40, 0x90);
    let report = FrameReport::parse(&ack_rx).unwrap();
    let fc = report.frame_control;
    assert_eq!(fc.frame_type, FrameType::Ack);
    assert_eq!(fc.frame_version, FrameVersion::Ieee802154_2015);
    assert!(!fc.ack_request);
    assert_eq!(fc.pan_id_compression, header.frame_control().pan_id_compression);
    assert_eq!(
        fc.sequence_number_suppression,
        header.frame_control().sequence_number_suppression
    );

    let FrameContent::EnhancedAck(body) = report.content else {
        panic!("expected an enhanced ack");
    };
    assert_eq!(body.sequence_number, Some(9));
    assert_eq!(body.addressing.dst_pan_id, Some(0x0001));
    assert_eq!(body.addressing.dst_address, Address::Short(0x0003));
    assert_eq!(body.addressing.src_address, Address::Short(0x0002));
    assert!(body.payload.is_empty());
}

#[test]
fn ack_example_without_compression() {
    // 2015 Data, no PAN ID compression, dst 0x0002 / PAN 0x0001, src 0x0003 / PAN 0x0001.
    let rx = [
        0x10, 0x21, 0xa8, 0x05, 0x01, 0x00, 0x02, 0x00, 0x01, 0x00, 0x03, 0x00, 0x4f, 0x4b, 0x00,
        0xc4, 0x78,
    ];

    let mut ack = [0u8; MAX_ENHANCED_ACK_LEN];
    let len = build_enhanced_ack(&rx, &mut ack).unwrap();

    let ack_rx = as_received(&ack[..len], -40, 0x90);
    let report = FrameReport::parse(&ack_rx).unwrap();
    assert_eq!(report.frame_control.frame_type, FrameType::Ack);
    assert_eq!(
        report.frame_control.frame_version,
        FrameVersion::Ieee802154_2015
    );
    assert!(!report.frame_control.pan_id_compression);

    let FrameContent::EnhancedAck(body) = report.content else {
        panic!("expected an enhanced ack");
    };
    assert_eq!(body.sequence_number, Some(5));
    assert_eq!(
        body.addressing,
        AddressingFieldsRepr {
            dst_pan_id: Some(0x0001),
            dst_address: Address::Short(0x0003),
            src_pan_id: Some(0x0001),
            src_address: Address::Short(0x0002),
        }
    );
}

#[test]
fn ack_without_source_address_decodes() {
    // 2015 Data, no compression, dst 0x0002 / PAN 0x0001, src PAN 0x0005, src absent.
    let rx = hex::decode("0c 0128 07 0100 0200 0500 00 c4 78".replace(' ', "")).unwrap();

    let mut ack = [0u8; MAX_ENHANCED_ACK_LEN];
    let len = build_enhanced_ack(&rx, &mut ack).unwrap();

    let ack_rx = as_received(&ack[..len], -40, 0x90);
    let report = FrameReport::parse(&ack_rx).unwrap();

    let FrameContent::EnhancedAck(body) = report.content else {
        panic!("expected an enhanced ack");
    };
    assert_eq!(body.sequence_number, Some(7));
    assert_eq!(
        body.addressing,
        AddressingFieldsRepr {
            dst_pan_id: None,
            dst_address: Address::Absent,
            src_pan_id: Some(0x0001),
            src_address: Address::Short(0x0002),
        }
    );
    assert!(body.payload.is_empty());
}

#[test]
fn ack_without_destination_address_decodes() {
    // 2015 Data, no compression, dst absent, src 0x0003 / PAN 0x0005.
    let rx = hex::decode("0a 01a0 07 0500 0300 00 c4 78".replace(' ', "")).unwrap();

    let mut ack = [0u8; MAX_ENHANCED_ACK_LEN];
    let len = build_enhanced_ack(&rx, &mut ack).unwrap();

    let ack_rx = as_received(&ack[..len], -40, 0x90);
    let report = FrameReport::parse(&ack_rx).unwrap();

    let FrameContent::EnhancedAck(body) = report.content else {
        panic!("expected an enhanced ack");
    };
    assert_eq!(
        body.addressing,
        AddressingFieldsRepr {
            dst_pan_id: Some(0x0005),
            dst_address: Address::Short(0x0003),
            src_pan_id: Some(0x0005),
            src_address: Address::Absent,
        }
    );
    assert!(body.payload.is_empty());
}

#[test]
fn ack_keeps_extended_bytes_as_received() {
    let header = FrameBuilder::new_data_2015()
        .set_sequence_number(1)
        .set_dst(0x0001, Address::Extended(EXT_A))
        .set_src(0x0002, Address::Extended(EXT_B))
        .finalize()
        .unwrap();
    let mut tx = [0u8; MAX_FRAME_LEN];
    let tx_len = DataFrameRepr::new(header, &[]).emit(&mut tx).unwrap();
    let rx = as_received(&tx[..tx_len], 0, 0);

    let mut ack = [0u8; MAX_ENHANCED_ACK_LEN];
    let len = build_enhanced_ack(&rx, &mut ack).unwrap();

    assert_eq!(len, MAX_ENHANCED_ACK_LEN);
    // Source block of the data frame first, then its destination block.
    assert_eq!(&ack[4..6], &rx[14..16]);
    assert_eq!(&ack[6..14], &rx[16..24]);
    assert_eq!(&ack[14..16], &rx[4..6]);
    assert_eq!(&ack[16..24], &rx[6..14]);
}
