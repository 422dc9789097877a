use bevy_math::ivec2;
use pixel_nav::{palette, solve, CoreError, Distance, Params, PathfinderKind, Raster};

fn main() -> Result<(), CoreError> {
    // A 200×200 field with an L-shaped wall between the corners.
    let mut raster = Raster::new(200, 200, palette::SAFE);
    raster.fill_rect(90, 0, 20, 140, palette::UNSAFE);
    raster.fill_rect(90, 120, 80, 20, palette::UNSAFE);

    let mut params = Params::new(
        PathfinderKind::AStar,
        Distance::Euclidean,
        ivec2(20, 20),
        ivec2(180, 60),
    );
    params.cell_size = 20;

    let result = solve(&raster, &params)?;

    println!("visited {} cells", result.visited.len());
    println!("path of {} cells:", result.path.len());
    for point in &result.points {
        println!("  {point}");
    }

    Ok(())
}
