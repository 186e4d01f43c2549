use argh::FromArgs;

use superpose_3d::linalg::transform_points3d;
use superpose_3d::ops::weighted_rmsd;
use superpose_3d::transforms::axis_angle_to_rotation_matrix;
use superpose_3d::superimpose;

#[derive(FromArgs)]
/// Superimpose point sets onto their references and report the fit quality
struct Args {
    /// number of points for the randomized round-trip run
    #[argh(option, short = 'n', default = "100")]
    num_points: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // a planar triangle: the reference rotated a quarter turn about z and shifted
    let moving = vec![[0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [-1.0, 1.0, 0.0]];
    let reference = vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]];
    let weights = vec![1.0, 1.0, 1.0];

    let fitted = superimpose(&moving, &reference, &weights)?;
    for (point, point_ref) in fitted.iter().zip(reference.iter()) {
        println!("fitted: {:?} reference: {:?}", point, point_ref);
    }
    println!(
        "triangle rmsd after fit: {:.3e}",
        weighted_rmsd(&fitted, &reference, &weights)?
    );

    // randomized round trip: a synthetic cloud under a known rigid motion
    let moving = (0..args.num_points)
        .map(|_| {
            [
                rand::random::<f64>(),
                rand::random::<f64>(),
                rand::random::<f64>(),
            ]
        })
        .collect::<Vec<_>>();

    let rotation = axis_angle_to_rotation_matrix(&[1.0, 1.0, 0.0], 0.5)?;
    let translation = [0.2, -0.4, 1.0];
    let mut reference = vec![[0.0; 3]; moving.len()];
    transform_points3d(&moving, &rotation, &translation, &mut reference)?;

    let weights = vec![1.0; moving.len()];
    let fitted = superimpose(&moving, &reference, &weights)?;

    log::info!("aligned {} synthetic points", args.num_points);
    println!(
        "synthetic rmsd after fit: {:.3e}",
        weighted_rmsd(&fitted, &reference, &weights)?
    );

    Ok(())
}
