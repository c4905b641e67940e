#![allow(dead_code)]

use std::io::Cursor;
use std::sync::Arc;

use image::{ImageFormat, Rgb, RgbImage};
use peaking_server::protocol::encode_frame_payload;
use peaking_server::{ServerConfig, ServerContext};
use serde_json::{json, Value};

pub fn context() -> Arc<ServerContext> {
    Arc::new(ServerContext::new(ServerConfig::default()))
}

/// PNG of alternating 20x20 blocks of gray 100 and 200.
pub fn checkerboard_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        let v = if (x / 20 + y / 20) % 2 == 0 { 100 } else { 200 };
        Rgb([v, v, v])
    });
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .expect("png encode");
    buf.into_inner()
}

pub fn checkerboard_b64(width: u32, height: u32) -> String {
    encode_frame_payload(&checkerboard_png(width, height))
}

/// A `process_frame` envelope around `data`.
pub fn process_frame(data: Value) -> String {
    json!({ "event": "process_frame", "data": data }).to_string()
}
