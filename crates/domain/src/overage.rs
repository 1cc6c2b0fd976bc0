// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Display cap for overage. Completions themselves are not capped.
pub const OVERAGE_DISPLAY_CAP: u32 = 20;

/// Returns how far `completed` exceeded `target`, clamped to `0..=20`.
#[must_use]
pub const fn overage(completed: u32, target: u32) -> u32 {
    let excess: u32 = completed.saturating_sub(target);
    if excess > OVERAGE_DISPLAY_CAP {
        OVERAGE_DISPLAY_CAP
    } else {
        excess
    }
}
