//! Simple probe example for an attached RRHFOEM04 reader.
//!
//! Usage:
//!   cargo run -p rrhfoem --example reader_probe --features usb

#[cfg(feature = "usb")]
fn main() -> anyhow::Result<()> {
    use rrhfoem::Reader;

    env_logger::init();

    let mut reader = Reader::open()?;

    match reader.reader_info()? {
        Some(info) => println!("Reader: {} (serial {})", info.model, info.serial),
        None => println!("Reader did not report model/serial"),
    }

    reader.buzzer_beep()?;

    let tags = reader.iso15693_16_slot_inventory()?;
    if tags.is_empty() {
        println!("No ISO15693 tags in the field");
    }
    for uid in &tags {
        println!("ISO15693 tag: {}", uid);
    }

    match reader.iso14443a_inventory()? {
        Some(uid) => println!("ISO14443A card: {}", uid),
        None => println!("No ISO14443A card in the field"),
    }

    reader.close();
    Ok(())
}

#[cfg(not(feature = "usb"))]
fn main() {
    eprintln!("rebuild with --features usb to talk to a reader");
}
