//! Property tests for pan offset accumulation.
//!
//! 1. While dragging, the offset equals the sum of the per-move deltas
//! 2. Moves while idle never change the offset
//! 3. The grid surface is rendered once however much the widget is panned

use gridpan::controllers::{PanController, PointerReleaseHub};
use gridpan::draw::RecordingSurface;
use gridpan::models::{GridSpec, GridStyle, PanPhase};
use gridpan::views::GridPanWidget;
use nannou::prelude::*;
use proptest::prelude::*;

// Whole-pixel pointer positions keep f32 sums exact
fn position_strategy() -> impl Strategy<Value = Point2> {
    (-4000i32..4000, -4000i32..4000).prop_map(|(x, y)| pt2(x as f32, y as f32))
}

#[derive(Debug, Clone)]
enum Op {
    Start(Point2),
    Move(Point2),
    End,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => position_strategy().prop_map(Op::Start),
        4 => position_strategy().prop_map(Op::Move),
        1 => Just(Op::End),
    ]
}

proptest! {
    #[test]
    fn offset_is_sum_of_move_deltas(
        start in position_strategy(),
        moves in prop::collection::vec(position_strategy(), 0..64),
    ) {
        let mut controller = PanController::new();
        controller.drag_start(start);

        let mut expected = Vec2::ZERO;
        let mut last = start;
        for position in &moves {
            let delta = controller.drag_move(*position);
            prop_assert_eq!(delta, Some(*position - last));
            expected += *position - last;
            last = *position;
        }
        controller.drag_end();

        prop_assert_eq!(controller.offset(), expected);
        // incremental deltas telescope to the overall pointer travel
        prop_assert_eq!(expected, last - start);
    }

    #[test]
    fn idle_moves_never_change_offset(
        moves in prop::collection::vec(position_strategy(), 0..64),
    ) {
        let mut controller = PanController::new();
        for position in moves {
            prop_assert_eq!(controller.drag_move(position), None);
        }
        prop_assert_eq!(controller.offset(), Vec2::ZERO);
        prop_assert_eq!(controller.phase(), PanPhase::Idle);
    }

    #[test]
    fn arbitrary_gestures_match_reference(ops in prop::collection::vec(op_strategy(), 0..128)) {
        let mut controller = PanController::new();
        let mut active = false;
        let mut last = Vec2::ZERO;
        let mut expected = Vec2::ZERO;

        for op in ops {
            match op {
                Op::Start(p) => {
                    controller.drag_start(p);
                    active = true;
                    last = p;
                }
                Op::Move(p) => {
                    controller.drag_move(p);
                    if active {
                        expected += p - last;
                        last = p;
                    }
                }
                Op::End => {
                    controller.drag_end();
                    active = false;
                }
            }
            prop_assert_eq!(controller.is_dragging(), active);
        }
        prop_assert_eq!(controller.offset(), expected);
    }

    #[test]
    fn panning_never_rerenders(moves in prop::collection::vec(position_strategy(), 1..32)) {
        let spec = GridSpec::new(200.0, 40.0, 1.0).unwrap();
        let mut widget = GridPanWidget::new(spec, GridStyle::default(), RecordingSurface::new(1.0));
        let mut hub = PointerReleaseHub::new();
        widget.initialize(&mut hub).unwrap();
        let commands_after_mount = widget.surface().commands().len();

        widget.pointer_pressed(Point2::ZERO);
        for position in moves {
            widget.pointer_moved(position);
        }
        hub.dispatch();

        prop_assert_eq!(widget.render_count(), 1);
        prop_assert_eq!(widget.surface().commands().len(), commands_after_mount);
        prop_assert_eq!(widget.display_rect().wh(), vec2(200.0, 200.0));
    }
}
