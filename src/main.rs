// ./src/main.rs
use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;
use roof_outline::prelude::*;
use std::path::PathBuf;

/// Spielt eine Klickfolge durch die Auswahl ab und misst das umrandete Dach.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Angeklickte Punkte als `x,y` in Anzeige-Pixeln, in Klickreihenfolge
    #[arg(required = true, allow_hyphen_values = true, value_parser = parse_point)]
    points: Vec<Point>,

    /// Physikalische Fläche pro px²
    #[arg(long, default_value_t = DEFAULT_SCALE_FACTOR)]
    scale: f64,

    /// Maximaler Abstand erster/letzter Punkt zum Schließen (px)
    #[arg(long, default_value_t = CLOSE_THRESHOLD)]
    threshold: f64,

    /// Scanline am Zeilenanfang statt in der Zeilenmitte abtasten
    #[arg(long)]
    row_start: bool,

    /// Auswahl zusätzlich als SVG speichern
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn parse_point(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{value}`"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("invalid x in `{value}`: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("invalid y in `{value}`: {e}"))?;
    Ok(Point::new(x, y))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let sampling = if cli.row_start {
        ScanlineSampling::RowStart
    } else {
        ScanlineSampling::RowCenter
    };
    let config = SelectionConfig::new()
        .with_scale_factor(cli.scale)
        .with_close_threshold(cli.threshold)
        .with_sampling(sampling);
    config.validate()?;

    let mut app = App::new();
    app.add_plugins(LogPlugin::default())
        .insert_resource(config)
        .add_plugins(RoofSelectionPlugin);

    // Ein Frame pro Klick, danach "Fertig"
    for point in &cli.points {
        app.world.send_event(PointAdded { point: *point });
        app.update();
    }
    app.world.send_event(FinishRequested);
    app.update();

    let selection = app.world.resource::<RoofSelection>();
    println!("{}", selection.status());
    if let Some(report) = &selection.last_report {
        println!("{report}");
    } else if let Some(reason) = selection.last_rejection {
        println!("{reason}");
    }

    if let Some(path) = cli.svg {
        save_outline_svg(path, &session_document(&selection.session))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("12,34.5"), Ok(Point::new(12.0, 34.5)));
        assert_eq!(parse_point(" -3 , 4 "), Ok(Point::new(-3.0, 4.0)));
        assert!(parse_point("12").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn test_cli_parses_points_and_flags() {
        let cli = Cli::try_parse_from([
            "roof_outline",
            "0,0",
            "10,0",
            "10,10",
            "--scale",
            "0.5",
            "--row-start",
        ])
        .unwrap();
        assert_eq!(cli.points.len(), 3);
        assert_eq!(cli.scale, 0.5);
        assert_eq!(cli.threshold, 10.0);
        assert!(cli.row_start);
        assert!(cli.svg.is_none());
    }
}
