use kismet::{AnalysisResult, Payload};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_result(payload: &Payload, result: &AnalysisResult, color: bool) {
    let palette = ansi::Palette::new(color);
    let service = match result.service() {
        Some(kind) => kind.as_str().to_string(),
        None => format!("default (requested \"{}\")", payload.service_id),
    };
    println!("\n{}", palette.bold(palette.paint(format!("✦  Service: {service}"), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Interpretation ━━━", ansi::GRAY));
    println!("  {}", result.interpretation());

    if let Some(numbers) = result.numbers() {
        println!("\n{}", palette.paint("━━━ Numbers ━━━", ansi::GRAY));
        println!("  {}", palette.bold(palette.paint(fmt_numbers(numbers), ansi::GREEN)));
        if let Some(joker) = result.joker() {
            println!("  {} {}", palette.dim("joker:"), palette.paint(joker.to_string(), ansi::YELLOW));
        }
    }

    println!("\n{}", palette.paint("━━━ Details ━━━", ansi::GRAY));
    print_details(result, &palette);
    println!();
}

fn print_details(result: &AnalysisResult, palette: &ansi::Palette) {
    match result {
        AnalysisResult::Dream(dream) => {
            print_symbols(&dream.symbols, palette);
            println!("  {} {}", palette.dim("energy:"), palette.paint(format!("{}%", dream.energy_level), ansi::MAGENTA));
        }
        AnalysisResult::Numerology(n) => {
            println!(
                "  {} {}  {} {}  {} {}",
                palette.dim("life path:"),
                palette.paint(n.life_path.to_string(), ansi::BLUE),
                palette.dim("│ expression:"),
                palette.paint(n.expression.to_string(), ansi::BLUE),
                palette.dim("│ personality:"),
                palette.paint(n.personality.to_string(), ansi::BLUE),
            );
        }
        AnalysisResult::Coffee(coffee) => {
            print_symbols(&coffee.symbols, palette);
            println!("  {} {}", palette.dim("time frame:"), palette.paint(&coffee.time_frame, ansi::MAGENTA));
        }
        AnalysisResult::Tarot(tarot) => {
            for (idx, card) in tarot.cards.iter().enumerate() {
                println!(
                    "  {} {} {} {}",
                    palette.paint(format!("[{}]", idx), ansi::GRAY),
                    palette.bold(palette.paint(card.name, ansi::GREEN)),
                    palette.dim(format!("│ {}", card.position)),
                    palette.paint(card.meaning, ansi::CYAN),
                );
            }
            println!("  {} {}", palette.dim("guidance:"), tarot.guidance);
        }
        AnalysisResult::Lottery(lottery) => {
            println!("  {} {}", palette.dim("game:"), palette.paint(&lottery.game_type, ansi::BLUE));
        }
        AnalysisResult::Default(_) => {
            println!("{}", palette.dim("  No service matched the request"));
            println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
            println!("  • The service id is not one of dream, numerology, coffee, tarot, lottery");
            println!("  • A required field was missing (dream: text, numerology: name + birth date)");
            println!("\n{}", palette.dim("  Tip: Set KISMET_LOG=kismet=debug to see why the request fell back"));
        }
    }
}

fn print_symbols(symbols: &[String], palette: &ansi::Palette) {
    if symbols.is_empty() {
        println!("  {} {}", palette.dim("symbols:"), palette.dim("none recognized"));
    } else {
        println!("  {} {}", palette.dim("symbols:"), palette.paint(symbols.join(", "), ansi::YELLOW));
    }
}

fn fmt_numbers(numbers: &[u32]) -> String {
    numbers.iter().map(|n| format!("{n:>2}")).collect::<Vec<_>>().join("  ")
}
