use anyhow::Context;
use icon_png::{chunks, parse_signature, Filter};

fn main() -> anyhow::Result<()> {
    let args: Vec<_> = std::env::args().skip(1).collect();
    let verbosity = if args.first().map(String::as_str) == Some("-v") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Error
    };
    pretty_env_logger::formatted_builder()
        .filter_level(verbosity)
        .init();
    let file_name = args
        .last()
        .filter(|arg| arg.as_str() != "-v")
        .context("Usage: icon-report [-v] FILE")?;

    let input = std::fs::read(file_name).context(format!("Failed to read {file_name}"))?;
    let (rest, _) = parse_signature(&input)
        .map_err(|_| anyhow::anyhow!("{file_name} doesn't start with the PNG signature"))?;

    let mut scanline_size = 0;
    let mut summaries = Vec::new();
    for chunk in chunks::iter_chunks(rest) {
        match chunk? {
            chunks::Chunk::IHDR(ihdr) => {
                scanline_size = ihdr.scanline_size();
                log::debug!("{ihdr:?}");
                summaries.push(serde_json::json!({
                    "type": "IHDR",
                    "width": ihdr.width,
                    "height": ihdr.height,
                    "bit_depth": ihdr.bit_depth,
                }));
            }
            chunks::Chunk::IDAT(idat) => {
                let data = idat.decode_data()?;
                let filters: Vec<String> = data
                    .iter()
                    .step_by(scanline_size.max(1))
                    .map(|&b| Filter::try_from(b).map(|f| format!("{f:?}")))
                    .collect::<anyhow::Result<_>>()?;
                summaries.push(serde_json::json!({
                    "type": "IDAT",
                    "compressed_len": idat.data().len(),
                    "raw_len": data.len(),
                    "scanline_filters": filters,
                }));
            }
            chunks::Chunk::IEND => summaries.push(serde_json::json!({ "type": "IEND" })),
            chunks::Chunk::Unknown(raw) => summaries.push(serde_json::json!({
                "type": raw.type_name(),
                "data_len": raw.data_len(),
            })),
        }
    }

    let now = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Iso8601::DEFAULT)?;
    let report = serde_json::json!({
        "date": now,
        "file": file_name,
        "chunks": summaries,
    });
    println!("{report}");
    Ok(())
}
