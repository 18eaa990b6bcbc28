use sdl3::render::FRect;

/// Clamps a horizontal delta so the box never exits [0, screen_w].
pub fn clamp_horizontal(rect: &FRect, dx: f32, screen_w: f32) -> f32 {
    if rect.x + dx < 0.0 {
        -rect.x
    } else if rect.x + rect.w + dx > screen_w {
        screen_w - (rect.x + rect.w)
    } else {
        dx
    }
}

/// Returns the clamped vertical delta if the box bottom would pass the
/// floor line, None while still airborne above it.
pub fn floor_contact(rect: &FRect, dy: f32, floor_y: f32) -> Option<f32> {
    if rect.y + rect.h + dy > floor_y {
        Some(floor_y - (rect.y + rect.h))
    } else {
        None
    }
}

pub fn aabb_overlap(rect1: &FRect, rect2: &FRect) -> bool {
    rect1.x < rect2.x + rect2.w
        && rect1.x + rect1.w > rect2.x
        && rect1.y < rect2.y + rect2.h
        && rect1.y + rect1.h > rect2.y
}
