use crate::paint::Color;
use crate::style::ColorStopListElement;

/// A resolved gradient stop.
///
/// `position` is a fraction of the gradient line (`NaN` only while a stop is
/// still unresolved inside [`resolve_color_stop_positions`]).
///
/// `transition_hint`, once resolved, is the hint's location as a fraction of
/// the distance from the *previous* stop to this one: `0` sits on the
/// previous stop, `1` on this one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub color: Color,
    pub position: f32,
    pub transition_hint: Option<f32>,
}

impl ColorStop {
    #[inline]
    pub const fn new(color: Color, position: f32) -> Self {
        Self { color, position, transition_hint: None }
    }

    #[inline]
    pub const fn with_hint(mut self, hint: f32) -> Self {
        self.transition_hint = Some(hint);
        self
    }

    #[inline]
    const fn unresolved(color: Color) -> Self {
        Self::new(color, f32::NAN)
    }

    #[inline]
    fn has_position(&self) -> bool {
        self.position.is_finite()
    }
}

/// Normalized stops: at least two, positions non-decreasing.
pub type ColorStopList = Vec<ColorStop>;

/// Resolves an authored stop list into a [`ColorStopList`].
///
/// `resolve_position` maps an external unit (length, angle, ...) to a
/// fraction of the gradient line. It is the only unit-aware piece; linear and
/// conic gradients differ only in the callback they pass.
///
/// Steps:
/// 1. Expand two-position entries into two stops of the same color.
/// 2. Default an unpositioned first stop to `0` and an unpositioned last stop to `1`.
/// 3. Resolve positions and hints in list order, raising each to the largest
///    value seen before it.
/// 4. Space runs of unpositioned stops evenly between their neighbours.
/// 5. Rewrite hints as a fraction of their segment.
///
/// # Panics
/// Panics if `color_stop_list` has fewer than two entries.
pub fn resolve_color_stop_positions<T>(
    color_stop_list: &[ColorStopListElement<T>],
    mut resolve_position: impl FnMut(&T) -> f32,
) -> ColorStopList {
    assert!(
        color_stop_list.len() >= 2,
        "gradient needs at least two color stops, got {}",
        color_stop_list.len()
    );

    let mut stops: ColorStopList = color_stop_list
        .iter()
        .flat_map(|element| {
            std::iter::repeat_n(ColorStop::unresolved(element.color), element.expanded_len())
        })
        .collect();
    let last = stops.len() - 1;

    stops[0].position = 0.0;

    let mut max_previous = stops[0].position;
    let mut clamped = 0usize;
    let mut resolve = |value: &T| {
        let value = resolve_position(value);
        let resolved = if value.is_finite() { value.max(max_previous) } else { max_previous };
        if resolved != value {
            clamped += 1;
        }
        max_previous = resolved;
        resolved
    };

    let mut index = 0;
    for element in color_stop_list {
        // A hint before the first stop has no segment to bias.
        if let Some(hint) = element.transition_hint.as_ref().filter(|_| index > 0) {
            stops[index].transition_hint = Some(resolve(hint));
        }
        if let Some(position) = &element.position {
            stops[index].position = resolve(position);
        }
        if let Some(position) = &element.second_position {
            index += 1;
            stops[index].position = resolve(position);
        }
        index += 1;
    }

    if clamped > 0 {
        log::debug!("raised {clamped} out-of-order stop position(s) to the running maximum");
    }

    if !stops[last].has_position() {
        stops[last].position = max_previous.max(1.0);
    }

    space_unpositioned_runs(&mut stops);
    relativize_hints(&mut stops);

    stops
}

/// Evenly spaces each run of unpositioned stops between the boundary before
/// it (the first stop's hint, else the previous position) and the boundary
/// after it (the next hint or position).
fn space_unpositioned_runs(stops: &mut [ColorStop]) {
    let last = stops.len() - 1;
    let mut i = 1;
    while i < last {
        if stops[i].has_position() {
            i += 1;
            continue;
        }

        let run_start = i - 1;
        let start = stops[i].transition_hint.unwrap_or(stops[run_start].position);

        let mut run_end = i + 1;
        while run_end < last
            && !stops[run_end].has_position()
            && stops[run_end].transition_hint.is_none()
        {
            run_end += 1;
        }
        let end = stops[run_end].transition_hint.unwrap_or(stops[run_end].position);

        let spacing = (end - start) / (run_end - run_start) as f32;
        for j in run_start + 1..run_end {
            stops[j].position = start + (j - run_start) as f32 * spacing;
        }

        // A hint-only stop at `run_end` still needs a position; it opens the next run.
        i = run_end;
    }
}

fn relativize_hints(stops: &mut [ColorStop]) {
    for i in 1..stops.len() {
        let previous = stops[i - 1].position;
        let stop = &mut stops[i];
        if let Some(hint) = stop.transition_hint {
            let length = stop.position - previous;
            stop.transition_hint = Some(if length > 0.0 {
                ((hint - previous) / length).clamp(0.0, 1.0)
            } else {
                0.0
            });
        }
    }
}

/// Blend weight of `next_stop` at `position`, for the segment between two
/// adjacent stops.
///
/// Saturates to `0` before the segment and `1` after it, so applying every
/// segment in turn only changes the color inside the segment containing
/// `position`. Zero-length segments resolve to `1`.
///
/// With a hint `H`, the weight is `P^(ln 0.5 / ln H)`, which is exactly `0.5`
/// at `P == H`.
pub fn color_stop_step(previous_stop: &ColorStop, next_stop: &ColorStop, position: f32) -> f32 {
    if position < previous_stop.position {
        return 0.0;
    }
    if position > next_stop.position {
        return 1.0;
    }

    let stop_length = next_stop.position - previous_stop.position;
    if stop_length <= 0.0 {
        return 1.0;
    }

    let p = (position - previous_stop.position) / stop_length;
    let Some(hint) = next_stop.transition_hint else {
        return p;
    };
    if hint >= 1.0 {
        return 0.0;
    }
    if hint <= 0.0 {
        return 1.0;
    }

    p.powf(0.5f32.ln() / hint.ln())
}
