// File: crates/qae-utils/tests/circuit.rs
// Purpose: Circuit drawing configuration is passed through to the drawer once.

use std::cell::RefCell;

use qae_chart::{Chart, Figure, FigureSize, Series};
use qae_utils::{draw_circuit, CircuitDiagram, CircuitDrawConfig, DrawLevel, DrawStyle, Result, UtilsError};

/// Records the arguments it was drawn with.
#[derive(Default)]
struct RecordingCircuit {
    calls: RefCell<Vec<(DrawStyle, usize, Option<DrawLevel>)>>,
}

impl CircuitDiagram for RecordingCircuit {
    fn render_diagram(&self, style: DrawStyle, decimals: usize, level: Option<DrawLevel>) -> Result<Figure> {
        self.calls.borrow_mut().push((style, decimals, level));
        let mut wires = Chart::new();
        for q in 0..3 {
            wires.add_series(Series::line_from(0, &[q as f64; 6]));
        }
        Ok(Figure::single(wires))
    }

    fn figure_size(&self) -> FigureSize {
        FigureSize::new(6.0, 3.0, 72.0)
    }
}

#[test]
fn defaults_match_notebook_helper() {
    let cfg = CircuitDrawConfig::default();
    assert_eq!(cfg.style, DrawStyle::Pennylane);
    assert_eq!(cfg.font_size, 20.0);
    assert_eq!(cfg.decimals, 2);
    assert_eq!(cfg.scale, None);
    assert_eq!(cfg.title, None);
    assert_eq!(cfg.level, None);
}

#[test]
fn draws_once_with_title_and_scale() {
    let circuit = RecordingCircuit::default();
    let cfg = CircuitDrawConfig {
        style: DrawStyle::SolarizedDark,
        title: Some("Encoder".into()),
        scale: Some(1.5),
        decimals: 3,
        level: Some(DrawLevel::Device),
        ..CircuitDrawConfig::default()
    };
    let plot = draw_circuit(&cfg, &circuit).expect("draw");

    assert_eq!(*circuit.calls.borrow(), vec![(DrawStyle::SolarizedDark, 3, Some(DrawLevel::Device))]);
    assert_eq!(plot.canvas.suptitle.as_deref(), Some("Encoder"));
    assert_eq!(plot.canvas.suptitle_size, 20.0);
    assert_eq!((plot.options.width, plot.options.height), (648, 324));
    assert_eq!(plot.options.theme.name, "solarized-dark");
    assert!(plot.to_png().expect("png").starts_with(&[137, 80, 78, 71]));
}

#[test]
fn untitled_diagram_has_no_suptitle() {
    let plot = draw_circuit(&CircuitDrawConfig::default(), &RecordingCircuit::default()).expect("draw");
    assert_eq!(plot.canvas.suptitle, None);
    assert_eq!(plot.options.theme.name, "classic");
}

#[test]
fn styles_and_levels_parse_by_name() {
    for style in DrawStyle::ALL {
        assert_eq!(style.to_string().parse::<DrawStyle>().expect("round trip"), style);
    }
    assert_eq!("black-white-dark".parse::<DrawStyle>().expect("style"), DrawStyle::BlackWhiteDark);
    assert!(matches!("neon".parse::<DrawStyle>(), Err(UtilsError::UnknownName { .. })));

    assert_eq!("gradient".parse::<DrawLevel>().expect("level"), DrawLevel::Gradient);
    assert_eq!("2".parse::<DrawLevel>().expect("level"), DrawLevel::Index(2));
    assert!("bottom".parse::<DrawLevel>().is_err());
}
