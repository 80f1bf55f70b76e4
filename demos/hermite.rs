extern crate schumaker_spline;

use schumaker_spline::{Node, SchumakerConfig, SchumakerSpline};

fn main() {

    let nodes = vec![
        Node::with_slope(0.0, 0.0, 0.0),
        Node::with_slope(1.0, 1.0, 2.5),
        Node::with_slope(2.0, 1.5, 0.1),
        Node::with_slope(4.0, 1.6, 0.0),
    ];

    let config = SchumakerConfig::new().set_min_split_fraction(0.1).unwrap();
    let spline = SchumakerSpline::with_config(nodes, config).unwrap();

    println!("knots: {:?}", spline.knots());

    println!("x;y;dy");
    for i in -4..=44 {
        let x = 0.1 * i as f64;
        let dy = spline.derivative(x).unwrap_or(f64::NAN);
        println!("{:.2};{:.4};{:.4}", x, spline.extrapolate(x), dy);
    }
}
