//! Sample gradients, one per feature of the engine.

use sheen_engine::coords::IntRect;
use sheen_engine::paint::{Color, Painter, Pixmap};
use sheen_engine::raster::{fill_conic_gradient, fill_linear_gradient};
use sheen_engine::style::{
    Angle, AnglePercentage, ColorStopListElement, ConicGradientStyle, GradientDirection,
    LengthPercentage, LinearGradientStyle, SideOrCorner,
};

#[derive(Debug)]
pub struct Scene {
    pub name: &'static str,
    pub description: &'static str,
    pub render: fn(i32, i32) -> Pixmap,
}

pub static SCENES: &[Scene] = &[
    Scene {
        name: "linear-basic",
        description: "to right, red to blue",
        render: linear_basic,
    },
    Scene {
        name: "linear-hints",
        description: "30deg, three stops with a transition hint",
        render: linear_hints,
    },
    Scene {
        name: "linear-band",
        description: "to top right, double-position yellow band",
        render: linear_band,
    },
    Scene {
        name: "linear-stripes",
        description: "repeating 45deg hard-edged stripes",
        render: linear_stripes,
    },
    Scene {
        name: "conic-wheel",
        description: "hue wheel from 0deg",
        render: conic_wheel,
    },
    Scene {
        name: "conic-fade",
        description: "off-center translucent conic over a checkerboard",
        render: conic_fade,
    },
];

type LinearStop = ColorStopListElement<LengthPercentage>;
type ConicStop = ColorStopListElement<AnglePercentage>;

fn pct(v: f32) -> LengthPercentage {
    LengthPercentage::Percent(v)
}

fn deg(v: f32) -> AnglePercentage {
    AnglePercentage::Angle(Angle::Deg(v))
}

fn linear(width: i32, height: i32, style: &LinearGradientStyle) -> Pixmap {
    let mut pixmap = Pixmap::new(width, height);
    fill_linear_gradient(&mut pixmap, IntRect::new(0, 0, width, height), style);
    pixmap
}

fn linear_basic(width: i32, height: i32) -> Pixmap {
    let style = LinearGradientStyle::new(
        GradientDirection::SideOrCorner(SideOrCorner::Right),
        vec![LinearStop::new(Color::RED), LinearStop::new(Color::BLUE)],
    );
    linear(width, height, &style)
}

fn linear_hints(width: i32, height: i32) -> Pixmap {
    let style = LinearGradientStyle::new(
        GradientDirection::Angle(Angle::Deg(30.0)),
        vec![
            LinearStop::new(Color::WHITE),
            LinearStop::new(Color::from_rgb(255, 140, 0)).at(pct(40.0)).with_hint(pct(10.0)),
            LinearStop::new(Color::from_rgb(40, 0, 90)),
        ],
    );
    linear(width, height, &style)
}

fn linear_band(width: i32, height: i32) -> Pixmap {
    let style = LinearGradientStyle::new(
        GradientDirection::SideOrCorner(SideOrCorner::TopRight),
        vec![
            LinearStop::new(Color::RED),
            LinearStop::new(Color::YELLOW).band(pct(30.0), pct(70.0)),
            LinearStop::new(Color::BLUE),
        ],
    );
    linear(width, height, &style)
}

fn linear_stripes(width: i32, height: i32) -> Pixmap {
    let ink = Color::from_rgb(30, 30, 30);
    let paper = Color::from_rgb(240, 200, 40);
    let style = LinearGradientStyle::new(
        GradientDirection::Angle(Angle::Deg(45.0)),
        vec![
            LinearStop::new(ink).at(LengthPercentage::Px(0.0)),
            LinearStop::new(ink).at(LengthPercentage::Px(12.0)),
            LinearStop::new(paper).at(LengthPercentage::Px(12.0)),
            LinearStop::new(paper).at(LengthPercentage::Px(24.0)),
        ],
    )
    .repeating();
    linear(width, height, &style)
}

fn conic_wheel(width: i32, height: i32) -> Pixmap {
    let hues = [
        Color::RED,
        Color::YELLOW,
        Color::from_rgb(0, 255, 0),
        Color::from_rgb(0, 255, 255),
        Color::BLUE,
        Color::from_rgb(255, 0, 255),
        Color::RED,
    ];
    let style = ConicGradientStyle::new(hues.into_iter().map(ConicStop::new).collect());
    let mut pixmap = Pixmap::new(width, height);
    let rect = pixmap.rect();
    fill_conic_gradient(&mut pixmap, rect, &style);
    pixmap
}

fn conic_fade(width: i32, height: i32) -> Pixmap {
    let mut pixmap = checkerboard(width, height, 16);
    let style = ConicGradientStyle::new(vec![
        ConicStop::new(Color::from_rgba(0, 90, 255, 0)),
        ConicStop::new(Color::from_rgba(0, 90, 255, 255)).at(deg(270.0)),
        ConicStop::new(Color::from_rgba(255, 255, 255, 255)).at(deg(270.0)),
    ])
    .from_angle(Angle::Turn(0.125))
    .at(pct(30.0), pct(60.0));
    let rect = pixmap.rect();
    fill_conic_gradient(&mut pixmap, rect, &style);
    pixmap
}

fn checkerboard(width: i32, height: i32, cell: i32) -> Pixmap {
    let mut pixmap = Pixmap::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let dark = (x / cell + y / cell) % 2 == 0;
            let color = if dark { Color::from_rgb(180, 180, 180) } else { Color::WHITE };
            pixmap.set_pixel(x, y, color, false);
        }
    }
    pixmap
}
