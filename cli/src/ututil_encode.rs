// ututil CLI
extern crate clap;
extern crate ututil;

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use clap::{App, Arg};

use ututil::{Encoder, PixelFormat, Picture};

/// Size, in bytes, of one picture in `format` at `width x height`.
fn picture_size(format: PixelFormat, width: usize, height: usize) -> usize {
    match format {
        PixelFormat::Rgb24 => width * height * 3,
        PixelFormat::Rgba => width * height * 4,
        PixelFormat::Yuv422P => width * height + 2 * (width / 2) * height,
        PixelFormat::Yuv420P => width * height + 2 * (width / 2) * (height / 2),
    }
}

fn main() -> io::Result<()> {
    let matches = App::new("ututil-encode")
        .about("Encodes a raw picture dump into a Ut Video packet")
        .arg(
            Arg::new("input-path")
                .help("Raw picture dump to encode")
                .short('i')
                .long("input")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::new("output-path")
                .help("Output file (defaults to stdout)")
                .short('o')
                .long("output")
                .takes_value(true),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("rgb24 | rgba | yuv422p | yuv420p")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::new("prediction")
                .long("prediction")
                .help("0=none 1=left 2=median")
                .takes_value(true)
                .default_value("2"),
        )
        .arg(
            Arg::new("slices")
                .long("slices")
                .takes_value(true)
                .default_value("1"),
        )
        .get_matches();

    let input_path = matches.value_of("input-path").map(Path::new).unwrap();
    let width: usize = matches.value_of("width").unwrap().parse().unwrap();
    let height: usize = matches.value_of("height").unwrap().parse().unwrap();
    let format = PixelFormat::from_name(matches.value_of("format").unwrap())
        .unwrap_or_else(|err| {
            eprintln!("{}", err);
            std::process::exit(1);
        });
    let prediction: u8 = matches.value_of("prediction").unwrap().parse().unwrap();
    let slices: usize = matches.value_of("slices").unwrap().parse().unwrap();

    let mut input = File::open(input_path)?;
    let mut raw = Vec::with_capacity(picture_size(format, width, height));
    input.read_to_end(&mut raw)?;

    let mut encoder = Encoder::new(format, width, height, prediction, slices)
        .unwrap_or_else(|err| {
            eprintln!("cannot construct encoder: {}", err);
            std::process::exit(1);
        });

    let packet = {
        let picture = build_picture(format, width, height, &raw);
        encoder.encode_picture(&picture).unwrap_or_else(|err| {
            eprintln!("encode failed: {}", err);
            std::process::exit(1);
        })
    };

    let mut out: Box<dyn Write> = match matches.value_of("output-path") {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    out.write_all(&encoder.extradata())?;
    out.write_all(&(packet.len() as u32).to_le_bytes())?;
    out.write_all(&packet)?;
    out.flush()
}

fn build_picture<'a>(
    format: PixelFormat,
    width: usize,
    height: usize,
    raw: &'a [u8],
) -> Picture<'a> {
    match format {
        PixelFormat::Rgb24 => Picture::Interleaved {
            data: raw,
            linesize: width * 3,
        },
        PixelFormat::Rgba => Picture::Interleaved {
            data: raw,
            linesize: width * 4,
        },
        PixelFormat::Yuv422P | PixelFormat::Yuv420P => {
            let luma_size = width * height;
            let chroma_width = width / 2;
            let chroma_height = if format == PixelFormat::Yuv420P {
                height / 2
            } else {
                height
            };
            let chroma_size = chroma_width * chroma_height;
            let (y, rest) = raw.split_at(luma_size);
            let (u, v) = rest.split_at(chroma_size);
            Picture::Planar {
                planes: [y, u, v],
                linesizes: [width, chroma_width, chroma_width],
            }
        }
    }
}
