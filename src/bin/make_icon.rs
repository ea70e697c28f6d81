use icon_png::{icon, PNG};

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
    let file_name = match args.last() {
        Some(arg) if arg != "-v" => arg.clone(),
        _ => String::from("icon.png"),
    };

    let png = PNG::new(icon::WIDTH, icon::HEIGHT, icon::render())?;
    std::fs::write(&file_name, png.encode())?;
    log::info!("wrote {}x{} icon to {file_name}", png.width(), png.height());
    println!("Basic icon created");
    Ok(())
}
