use clap::Parser;
use p2p15d4_cat::FrameParser;

/// `cat` for IEEE 802.15.4 frames as delivered by the receiver.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The receive buffer to parse, hex encoded: length, frame, filler byte,
    /// RSSI and LQI.
    #[clap(value_parser(clap::builder::NonEmptyStringValueParser::new()))]
    input: String,

    /// Print the report the way the firmware logs it.
    #[arg(long)]
    report: bool,

    /// Also print the Enhanced Acknowledgment answering the frame.
    #[arg(long)]
    ack: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let output = if args.report {
        FrameParser::report_hex(&args.input)
    } else {
        FrameParser::parse_hex(&args.input)
    };

    match output {
        Ok(output) => print!("{output}"),
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    }

    if args.ack {
        match FrameParser::enhanced_ack_hex(&args.input) {
            Ok(ack) => println!("Enhanced-Ack: {ack}"),
            Err(err) => {
                log::error!("{err}");
                std::process::exit(1);
            }
        }
    }
}
