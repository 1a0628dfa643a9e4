use super::{PolarPoint, SkyChart};
use crate::astro_math::deg_to_rad;
use crate::errors::{Error, Result};
use crate::style::{Marker, ResolvedStyle};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

const TITLE_HEIGHT: u32 = 40;
const FONT: &str = "sans-serif";
const LINE_HEIGHT: i32 = 16;

impl SkyChart {
    /// Draws the chart onto any plotters drawing area
    pub fn render<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        root.fill(&WHITE).map_err(Error::drawing)?;

        let (width, height) = root.dim_in_pixel();
        let top = if let Some(title) = &self.settings.title {
            let style = (FONT, 24)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Center));
            root.draw(&Text::new(
                title.clone(),
                ((width / 2) as i32, (TITLE_HEIGHT / 2) as i32),
                style,
            ))
            .map_err(Error::drawing)?;
            TITLE_HEIGHT
        } else {
            0
        };

        let plot_height = height.saturating_sub(top);
        let centre = ((width / 2) as i32, (top + plot_height / 2) as i32);
        // Leave room for labels drawn outside the rim
        let label_frac = self.theta_label_frac.max(1.);
        let radius_px = f64::from(width.min(plot_height)) / 2. / (label_frac + 0.15);

        self.draw_axes(root, centre, radius_px)?;
        self.draw_layers(root, centre, radius_px)?;
        self.draw_legend(root, top as i32)?;
        Ok(())
    }

    fn to_pixel(&self, centre: (i32, i32), point: PolarPoint, radius_px: f64) -> (i32, i32) {
        let (dx, dy) = self.screen_offset(point, radius_px);
        (centre.0 + dx.round() as i32, centre.1 + dy.round() as i32)
    }

    fn draw_axes<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        centre: (i32, i32),
        radius_px: f64,
    ) -> Result<()> {
        let (min, max) = self.rlim();
        let grid_style = RGBColor(200, 200, 200).stroke_width(1);

        if self.grid {
            for tick in self.rgrids.iter().filter(|t| (min..=max).contains(&t.position)) {
                let r = (tick.position - min) / (max - min) * radius_px;
                root.draw(&Circle::new(centre, r.round() as i32, grid_style))
                    .map_err(Error::drawing)?;
            }
            for tick in &self.thetagrids {
                let end = self.to_pixel(
                    centre,
                    PolarPoint::new(deg_to_rad(tick.position), max),
                    radius_px,
                );
                root.draw(&PathElement::new(vec![centre, end], grid_style))
                    .map_err(Error::drawing)?;
            }
        }

        root.draw(&Circle::new(
            centre,
            radius_px.round() as i32,
            BLACK.stroke_width(1),
        ))
        .map_err(Error::drawing)?;

        let label_style = (FONT, 13)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));

        let label_r = min + (max - min) * self.theta_label_frac;
        for tick in self.thetagrids.iter().filter(|t| !t.label.is_empty()) {
            let at = self.to_pixel(
                centre,
                PolarPoint::new(deg_to_rad(tick.position), label_r),
                radius_px,
            );
            draw_lines(root, &tick.label, at, &label_style)?;
        }

        let rgrid_theta = deg_to_rad(self.rgrid_angle);
        for tick in self
            .rgrids
            .iter()
            .filter(|t| !t.label.is_empty() && (min..=max).contains(&t.position))
        {
            let at = self.to_pixel(centre, PolarPoint::new(rgrid_theta, tick.position), radius_px);
            draw_lines(root, &tick.label, at, &label_style)?;
        }
        Ok(())
    }

    fn draw_layers<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        centre: (i32, i32),
        radius_px: f64,
    ) -> Result<()> {
        for layer in &self.layers {
            for point in &layer.points {
                let at = self.to_pixel(centre, *point, radius_px);
                draw_marker(root, at, &layer.style)?;
            }
        }
        Ok(())
    }

    fn draw_legend<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>, top: i32) -> Result<()> {
        let style = (FONT, 13)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Left, VPos::Center));
        let labelled = self.layers.iter().filter(|l| !l.style.label.is_empty());
        for (row, layer) in labelled.enumerate() {
            let y = top + 16 + row as i32 * 20;
            draw_marker(root, (16, y), &layer.style)?;
            root.draw(&Text::new(layer.style.label.clone(), (30, y), style.clone()))
                .map_err(Error::drawing)?;
        }
        Ok(())
    }
}

/// Plotters text is single-line, so multi-line labels are stacked by hand
fn draw_lines<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    text: &str,
    centre: (i32, i32),
    style: &TextStyle,
) -> Result<()> {
    let lines: Vec<&str> = text.lines().collect();
    let first = centre.1 - (lines.len() as i32 - 1) * LINE_HEIGHT / 2;
    for (i, line) in lines.iter().enumerate() {
        let at = (centre.0, first + i as i32 * LINE_HEIGHT);
        root.draw(&Text::new(line.trim_end().to_string(), at, style.clone()))
            .map_err(Error::drawing)?;
    }
    Ok(())
}

fn draw_marker<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    (x, y): (i32, i32),
    style: &ResolvedStyle,
) -> Result<()> {
    let colour = RGBColor::from(style.color).mix(style.alpha);
    let size = style.size as i32;
    let drawn = match style.marker {
        Marker::Circle => root.draw(&Circle::new((x, y), size, colour.filled())),
        Marker::Square => root.draw(&Rectangle::new(
            [(x - size, y - size), (x + size, y + size)],
            colour.filled(),
        )),
        Marker::Triangle => root.draw(&TriangleMarker::new((x, y), size, colour.filled())),
        Marker::Cross => root.draw(&Cross::new((x, y), size, colour.stroke_width(2))),
        Marker::Plus => root
            .draw(&PathElement::new(
                vec![(x - size, y), (x + size, y)],
                colour.stroke_width(2),
            ))
            .and_then(|_| {
                root.draw(&PathElement::new(
                    vec![(x, y - size), (x, y + size)],
                    colour.stroke_width(2),
                ))
            }),
    };
    drawn.map_err(Error::drawing)
}
