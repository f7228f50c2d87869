use super::particles::{Driver, Keyframe, Look, ParticleSpec};
use std::fmt::Write;

/// Inline style for a freshly spawned node, positioned at its origin.
pub fn start_style(spec: &ParticleSpec) -> String {
    let start = spec.start();
    let mut css = format!(
        "position:fixed;left:{:.1}px;top:{:.1}px;pointer-events:none;z-index:10000;opacity:{};",
        spec.origin.x, spec.origin.y, start.opacity
    );
    let size = format!("{:.2}{}", spec.size, spec.size_unit.suffix());
    match spec.look {
        Look::Glyph(_) => {
            _ = write!(css, "font-size:{};", size);
        }
        Look::Swatch(color) => {
            _ = write!(
                css,
                "width:{size};height:{size};background:{color};border-radius:50%;"
            );
        }
    }
    _ = write!(
        css,
        "--tx:{:.1}px;--ty:{:.1}px;--rot:{:.1}deg;--rotation:{:.1}deg;",
        spec.offset.x, spec.offset.y, spec.rotation_deg, spec.rotation_deg
    );
    match spec.driver {
        Driver::Keyframes => {
            _ = write!(css, "animation-duration:{}ms;", spec.duration_ms);
        }
        Driver::Transition => match spec.fade {
            Some(fade) => {
                _ = write!(
                    css,
                    "transition:transform {}ms {}, opacity {}ms;",
                    spec.duration_ms, spec.easing, fade.fade_ms
                );
            }
            None => {
                _ = write!(
                    css,
                    "transition:transform {d}ms {e}, opacity {d}ms {e};",
                    d = spec.duration_ms,
                    e = spec.easing
                );
            }
        },
    }
    css
}

pub fn transform(frame: &Keyframe) -> String {
    format!(
        "translate({:.1}px, {:.1}px) rotate({:.1}deg) scale({})",
        frame.offset.x, frame.offset.y, frame.rotation_deg, frame.scale
    )
}

/// Properties to set on the frame after spawning. Empty for keyframe-driven
/// nodes, whose stylesheet animation owns the end state. Nodes with a timed
/// fade keep their opacity until the fade runs.
pub fn end_properties(spec: &ParticleSpec) -> Vec<(&'static str, String)> {
    match spec.driver {
        Driver::Keyframes => Vec::new(),
        Driver::Transition if spec.fade.is_some() => {
            vec![("transform", transform(&spec.end()))]
        }
        Driver::Transition => {
            let end = spec.end();
            vec![
                ("transform", transform(&end)),
                ("opacity", format!("{}", end.opacity)),
            ]
        }
    }
}
