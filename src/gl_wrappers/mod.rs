pub(crate) mod info_log;
pub mod program;
pub mod shader;

/// Sets a full-window viewport with origin at (0, 0).
pub fn set_viewport(width: u32, height: u32) {
    let width: i32 = width.try_into().unwrap_or(i32::MAX);
    let height: i32 = height.try_into().unwrap_or(i32::MAX);
    // SAFETY:
    // gl::Viewport does not fail with non-negative values.
    unsafe {
        gl::Viewport(0, 0, width, height);
    }
}

/// Clears the color buffer to `color`.
pub fn clear_color(color: [f32; 4]) {
    unsafe {
        gl::ClearColor(color[0], color[1], color[2], color[3]);
        gl::Clear(gl::COLOR_BUFFER_BIT);
    }
}
