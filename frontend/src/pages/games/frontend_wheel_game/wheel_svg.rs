use yew::prelude::*;
use shared::wheel_geometry::{WheelDimensions, WheelFace};

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WheelSvgProps {
    pub face: WheelFace,
    pub rotation: f64,
    pub is_spinning: bool,
    pub accent: String,
    #[prop_or_default]
    pub dims: WheelDimensions,
}

/// CSS for the rotating group. The transition only runs while spinning so the
/// wheel settles instantly when the page re-renders at rest.
///
/// The hub sits at the user-space origin of the centred viewBox, so that is the
/// pivot. `center` would resolve against the view-box reference box instead.
pub fn rotation_style(rotation: f64, is_spinning: bool) -> String {
    let duration = if is_spinning { "4s" } else { "0s" };
    format!(
        "transform: rotate({}deg); transform-box: view-box; transform-origin: 0px 0px; transition: transform {} cubic-bezier(0.17, 0.67, 0.12, 0.99);",
        rotation, duration
    )
}

#[function_component(WheelSvg)]
pub fn wheel_svg(props: &WheelSvgProps) -> Html {
    let size = props.dims.canvas_size();
    let outer = props.dims.outer_radius;

    if props.face.is_empty() {
        return html! {
            <div class="flex flex-col items-center">
                <div
                    class="flex items-center justify-center rounded-full border-4 border-dashed border-gray-300 dark:border-gray-600"
                    style={format!("width: {}px; height: {}px;", size, size)}
                >
                    <span class={styles::TEXT_SECONDARY}>{"Select foods to spin!"}</span>
                </div>
            </div>
        };
    }

    let segments = props.face.segments().iter().map(|segment| {
        html! {
            <g key={segment.index}>
                <path
                    d={segment.path.clone()}
                    fill={segment.fill_color.clone()}
                    stroke="#ffffff"
                    stroke-width="2"
                />
                <text
                    x={segment.label_anchor.x.to_string()}
                    y={segment.label_anchor.y.to_string()}
                    transform={segment.label_transform()}
                    fill="#ffffff"
                    font-size="11"
                    font-weight="bold"
                    text-anchor="middle"
                    dominant-baseline="middle"
                >
                    {segment.label_text.clone()}
                </text>
            </g>
        }
    });

    let pointer = format!(
        "{},{} {},{} 0,{}",
        -12.0,
        -outer - 12.0,
        12.0,
        -outer - 12.0,
        -outer + 14.0
    );

    html! {
        <div class="flex flex-col items-center">
            <svg
                width={size.to_string()}
                height={size.to_string()}
                viewBox={props.dims.view_box()}
                class="max-w-full h-auto overflow-visible drop-shadow-xl"
            >
                <g style={rotation_style(props.rotation, props.is_spinning)}>
                    { for segments }
                </g>
                <circle
                    cx="0"
                    cy="0"
                    r={props.dims.inner_radius.to_string()}
                    fill="#ffffff"
                    stroke={props.accent.clone()}
                    stroke-width="4"
                />
                <polygon points={pointer} fill={props.accent.clone()} stroke="#ffffff" stroke-width="2" />
            </svg>
            <p class={classes!(styles::TEXT_SMALL, "mt-4")}>
                if props.is_spinning {
                    {"Deciding your fate..."}
                } else {
                    {format!("{} options on the wheel", props.face.len())}
                }
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_only_while_spinning() {
        let spinning = rotation_style(1845.5, true);
        assert!(spinning.contains("rotate(1845.5deg)"));
        assert!(spinning.contains("transform 4s"));

        let resting = rotation_style(1845.5, false);
        assert!(resting.contains("rotate(1845.5deg)"));
        assert!(resting.contains("transform 0s"));
    }

    #[test]
    fn test_wheel_pivots_on_the_hub() {
        let dims = WheelDimensions::default();
        // Hub is drawn at (0, 0), the middle of the centred viewBox
        assert_eq!(dims.view_box(), "-160 -160 320 320");
        for spinning in [true, false] {
            let style = rotation_style(1980.0, spinning);
            assert!(style.contains("transform-origin: 0px 0px"));
            assert!(style.contains("transform-box: view-box"));
            assert!(!style.contains("transform-origin: center"));
        }
    }
}
