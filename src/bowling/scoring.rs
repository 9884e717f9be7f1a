//! Scoring module
//!
//! Pure scoring passes run after every accepted roll. Bonuses and cumulative
//! scores are recomputed from the recorded rolls each time rather than
//! patched incrementally.

use crate::bowling::bonus_window::BonusWindow;
use crate::bowling::frame::Frame;

/// Resolve the bonus of every frame, scanning from the last frame to the first
///
/// A strike is owed the next two deliveries and a spare the next one,
/// regardless of frame boundaries. An open frame is owed nothing. A bonus
/// whose deliveries have not been rolled yet stays unresolved.
///
/// The final frame has no following frame: its own bonus roll is its bonus.
pub fn resolve_bonuses(frames: &mut [Frame]) {
    let mut window = BonusWindow::new();

    for frame in frames.iter_mut().rev() {
        let bonus = frame_bonus(frame, &window);
        frame.set_bonus(bonus);

        // Newest first, so the earlier frame sees its nearest delivery on top
        if let Some(second) = frame.second_roll() {
            window.push(second);
        }
        if let Some(first) = frame.first_roll() {
            window.push(first);
        }
    }
}

fn frame_bonus(frame: &Frame, window: &BonusWindow) -> Option<u16> {
    if !frame.rolls_complete() {
        return None;
    }

    if frame.is_final() {
        return if frame.has_bonus() {
            frame.bonus_roll().map(u16::from)
        } else {
            Some(0)
        };
    }

    if frame.is_strike() {
        window.next_two_rolls()
    } else if frame.is_spare() {
        window.next_roll().map(u16::from)
    } else {
        Some(0)
    }
}

/// Compute the running total in play order
///
/// Every frame with a resolved bonus receives its cumulative score. The first
/// unresolved frame stops the pass: neither it nor any later frame can be
/// scored yet.
///
/// # Returns
/// * The cumulative score of the last scored frame, if any
pub fn resolve_cumulative(frames: &mut [Frame]) -> Option<u16> {
    let mut running_total: u16 = 0;
    let mut total_score = None;
    let mut determinable = true;

    for frame in frames.iter_mut() {
        let contribution = if determinable { frame.contribution() } else { None };

        match contribution {
            Some(points) => {
                running_total += points;
                frame.set_cumulative_score(Some(running_total));
                total_score = Some(running_total);
            }
            None => {
                determinable = false;
                frame.set_cumulative_score(None);
            }
        }
    }

    total_score
}

#[cfg(test)]
mod tests {
    use super::*;

    const GUTTER_FRAME: &[u8] = &[0, 0];

    fn frames_from(rolls: &[&[u8]]) -> Vec<Frame> {
        rolls
            .iter()
            .enumerate()
            .map(|(position, frame_rolls)| {
                let mut frame = Frame::new(position as u8 + 1);
                for pins in frame_rolls.iter() {
                    frame.apply_roll(*pins);
                }
                frame
            })
            .collect()
    }

    #[test]
    fn test_spare_takes_next_roll() {
        let mut frames = frames_from(&[&[5, 5], &[3]]);
        resolve_bonuses(&mut frames);

        assert_eq!(frames[0].bonus(), Some(3));
        // Second frame is still open
        assert_eq!(frames[1].bonus(), None);

        let total = resolve_cumulative(&mut frames);
        assert_eq!(frames[0].cumulative_score(), Some(13));
        assert_eq!(total, Some(13));
    }

    #[test]
    fn test_strike_takes_next_two_rolls() {
        let mut frames = frames_from(&[&[10], &[4, 3]]);
        resolve_bonuses(&mut frames);
        assert_eq!(frames[0].bonus(), Some(7));
        assert_eq!(frames[1].bonus(), Some(0));

        let total = resolve_cumulative(&mut frames);
        assert_eq!(frames[0].cumulative_score(), Some(17));
        assert_eq!(frames[1].cumulative_score(), Some(24));
        assert_eq!(total, Some(24));
    }

    #[test]
    fn test_strike_bonus_crosses_frames() {
        // Strike, strike, 4: the first strike takes 10 + 4
        let mut frames = frames_from(&[&[10], &[10], &[4]]);
        resolve_bonuses(&mut frames);
        assert_eq!(frames[0].bonus(), Some(14));
        assert_eq!(frames[1].bonus(), None);
    }

    #[test]
    fn test_strike_unresolved_with_one_following_roll() {
        let mut frames = frames_from(&[&[10], &[4]]);
        resolve_bonuses(&mut frames);
        assert_eq!(frames[0].bonus(), None);

        let total = resolve_cumulative(&mut frames);
        assert_eq!(total, None);
        assert_eq!(frames[0].cumulative_score(), None);
    }

    #[test]
    fn test_spare_unresolved_without_following_roll() {
        let mut frames = frames_from(&[&[3, 4], &[6, 4]]);
        resolve_bonuses(&mut frames);
        assert_eq!(frames[0].bonus(), Some(0));
        assert_eq!(frames[1].bonus(), None);

        let total = resolve_cumulative(&mut frames);
        assert_eq!(frames[0].cumulative_score(), Some(7));
        assert_eq!(frames[1].cumulative_score(), None);
        assert_eq!(total, Some(7));
    }

    #[test]
    fn test_final_frame_uses_its_own_bonus_roll() {
        let mut rolls: Vec<&[u8]> = vec![GUTTER_FRAME; 9];
        rolls.push(&[10, 10, 10]);
        let mut frames = frames_from(&rolls);
        resolve_bonuses(&mut frames);
        assert_eq!(frames[9].bonus(), Some(10));

        let total = resolve_cumulative(&mut frames);
        assert_eq!(total, Some(30));
    }

    #[test]
    fn test_ninth_frame_strike_uses_tenth_frame_rolls() {
        let mut rolls: Vec<&[u8]> = vec![GUTTER_FRAME; 8];
        rolls.push(&[10]);
        rolls.push(&[10, 10, 10]);
        let mut frames = frames_from(&rolls);
        resolve_bonuses(&mut frames);
        assert_eq!(frames[8].bonus(), Some(20));

        let total = resolve_cumulative(&mut frames);
        assert_eq!(frames[8].cumulative_score(), Some(30));
        assert_eq!(total, Some(60));
    }

    #[test]
    fn test_recomputation_is_stable() {
        let mut frames = frames_from(&[&[10], &[5, 5], &[7, 2]]);
        resolve_bonuses(&mut frames);
        let first_total = resolve_cumulative(&mut frames);
        let snapshot = frames.clone();

        resolve_bonuses(&mut frames);
        let second_total = resolve_cumulative(&mut frames);

        assert_eq!(first_total, second_total);
        assert_eq!(frames, snapshot);
    }

    #[test]
    fn test_no_frames() {
        let mut frames: Vec<Frame> = Vec::new();
        resolve_bonuses(&mut frames);
        assert_eq!(resolve_cumulative(&mut frames), None);
    }
}
