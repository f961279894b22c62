use std::sync::Arc;

use pixels::{Error, Pixels, SurfaceTexture, TextureError};
use winit::window::Window;

use crate::world::{Entity, EntityManager, Rgba};

const CLEAR_COLOR: Rgba = Rgba::BLACK;

/// Software rasterizer over a `pixels` surface. The frame buffer keeps the
/// configured window size; `pixels` scales it onto the physical surface.
pub struct Renderer {
    pixels: Pixels<'static>,
    buffer_width: u32,
    buffer_height: u32,
}

impl Renderer {
    pub fn new(window: Arc<Window>, buffer_width: u32, buffer_height: u32) -> Result<Self, Error> {
        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(buffer_width, buffer_height, surface)?;
        Ok(Self {
            pixels,
            buffer_width,
            buffer_height,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels.resize_surface(width, height)
    }

    pub fn render_world(&mut self, world: &EntityManager) -> Result<(), Error> {
        let frame = self.pixels.frame_mut();
        draw_world(frame, self.buffer_width, self.buffer_height, world.entities());
        self.pixels.render()
    }
}

fn draw_world(frame: &mut [u8], width: u32, height: u32, entities: &[Entity]) {
    for chunk in frame.chunks_exact_mut(4) {
        chunk.copy_from_slice(&CLEAR_COLOR.0);
    }
    for entity in entities {
        if !entity.is_active() {
            continue;
        }
        let (Some(transform), Some(shape)) = (entity.transform, entity.shape) else {
            continue;
        };
        let left = transform.position.x.floor() as i32;
        let top = transform.position.y.floor() as i32;
        let right = (transform.position.x + shape.width).floor() as i32;
        let bottom = (transform.position.y + shape.height).floor() as i32;
        fill_rect_clipped(frame, width, height, (left, top, right, bottom), shape.color);
    }
}

// Half-open `[left, right) x [top, bottom)`.
fn fill_rect_clipped(
    frame: &mut [u8],
    width: u32,
    height: u32,
    (left, top, right, bottom): (i32, i32, i32, i32),
    color: Rgba,
) {
    let x0 = left.clamp(0, width as i32) as usize;
    let x1 = right.clamp(0, width as i32) as usize;
    let y0 = top.clamp(0, height as i32) as usize;
    let y1 = bottom.clamp(0, height as i32) as usize;
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let stride = width as usize * 4;
    for y in y0..y1 {
        let row_start = y * stride;
        let Some(row) = frame.get_mut(row_start + x0 * 4..row_start + x1 * 4) else {
            return;
        };
        for pixel in row.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{tags, Shape, Transform, Vec2};

    const WIDTH: u32 = 8;
    const HEIGHT: u32 = 6;

    fn pixel(frame: &[u8], x: u32, y: u32) -> [u8; 4] {
        let offset = ((y * WIDTH + x) * 4) as usize;
        [
            frame[offset],
            frame[offset + 1],
            frame[offset + 2],
            frame[offset + 3],
        ]
    }

    fn world_with_block(position: Vec2, size: Vec2, color: Rgba) -> EntityManager {
        let mut world = EntityManager::new();
        let id = world.create_entity(tags::ENEMY);
        let entity = world.find_entity_mut(id).expect("pending");
        entity.transform = Some(Transform::at(position));
        entity.shape = Some(Shape::new(size.x, size.y, color));
        world.update();
        world
    }

    #[test]
    fn block_is_filled_at_top_left_with_its_color() {
        let world = world_with_block(Vec2::new(2.0, 1.0), Vec2::new(3.0, 2.0), Rgba::RED);
        let mut frame = vec![7u8; (WIDTH * HEIGHT * 4) as usize];
        draw_world(&mut frame, WIDTH, HEIGHT, world.entities());

        assert_eq!(pixel(&frame, 2, 1), Rgba::RED.0);
        assert_eq!(pixel(&frame, 4, 2), Rgba::RED.0);
        assert_eq!(pixel(&frame, 5, 1), CLEAR_COLOR.0);
        assert_eq!(pixel(&frame, 2, 3), CLEAR_COLOR.0);
        assert_eq!(pixel(&frame, 0, 0), CLEAR_COLOR.0);
    }

    #[test]
    fn block_past_the_edges_is_clipped() {
        let world = world_with_block(Vec2::new(-3.0, 4.0), Vec2::new(5.0, 10.0), Rgba::WHITE);
        let mut frame = vec![0u8; (WIDTH * HEIGHT * 4) as usize];
        draw_world(&mut frame, WIDTH, HEIGHT, world.entities());

        assert_eq!(pixel(&frame, 0, 4), Rgba::WHITE.0);
        assert_eq!(pixel(&frame, 1, 5), Rgba::WHITE.0);
        assert_eq!(pixel(&frame, 2, 5), CLEAR_COLOR.0);
        assert_eq!(pixel(&frame, 0, 3), CLEAR_COLOR.0);
    }

    #[test]
    fn inactive_and_shapeless_entities_are_skipped() {
        let mut world = world_with_block(Vec2::ZERO, Vec2::new(2.0, 2.0), Rgba::RED);
        let bare = world.create_entity(tags::PLAYER);
        world.find_entity_mut(bare).expect("pending").transform = Some(Transform::default());
        world.update();
        world.entities_mut()[0].destroy();

        let mut frame = vec![0u8; (WIDTH * HEIGHT * 4) as usize];
        draw_world(&mut frame, WIDTH, HEIGHT, world.entities());
        assert!(frame
            .chunks_exact(4)
            .all(|chunk| chunk == CLEAR_COLOR.0.as_slice()));
    }
}
