use std::io::{ self, Write };

use parceltrack::DeliveryChain;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "=== ParcelTrack Delivery Chain Test ===\n")?;
    let mut chain = DeliveryChain::new();

    chain.insert_front("Orlando", 0, 9)?;
    chain.insert_back("Atlanta", 400, 14)?;
    chain.insert_back("Charlotte", 350, 17)?;

    writeln!(out, "Delivery chain:")?;
    chain.print_chain(&mut out)?;
    writeln!(out)?;

    writeln!(out, "Total distance: {} km\n", chain.total_distance())?;

    chain.display_bottleneck(&mut out)?;

    match chain.search("lanta") {
        Some(hub) => {
            writeln!(
                out,
                "Search result: Found \"{{{}, {}, {}}}\"\n",
                hub.name(),
                hub.distance(),
                hub.hour()
            )?
        }
        None => writeln!(out, "Search result: No match found\n")?,
    }

    writeln!(out, "Reverse delivery chain:")?;
    chain.print_chain_reverse(&mut out)?;
    writeln!(out)?;

    narrate_removal(&mut chain, "lanta", &mut out)?;

    chain.teardown();
    Ok(())
}

// 没匹配上也要打印出来，不依赖日志级别
fn narrate_removal<W: Write>(chain: &mut DeliveryChain, keyword: &str, out: &mut W) -> io::Result<()> {
    if chain.remove_first_match(keyword).is_none() {
        writeln!(out, "No match found for keyword: {}", keyword)?;
    }
    writeln!(out, "After removing first match for \"{}\":", keyword)?;
    chain.print_chain(out)?;
    writeln!(out)
}
