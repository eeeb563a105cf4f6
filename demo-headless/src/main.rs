use clap::Parser;
use std::f32::consts::{FRAC_PI_2, PI};
use std::process::ExitCode;
use v3math_core::{ops, Vec3, DEFAULT_TOLERANCE};

/// Reference harness for the vector library
#[derive(Parser, Debug)]
#[command(name = "v3test")]
#[command(about = "Runs the 3D vector math reference fixtures", long_about = None)]
struct Args {
    /// Component tolerance for vector and tight scalar comparisons
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f32,

    /// Only print failures and the summary
    #[arg(short, long)]
    quiet: bool,

    /// Print degradation warnings (filter with `RUST_LOG`)
    #[arg(short, long)]
    log: bool,
}

/// Collects PASS/FAIL lines and counts failures.
struct Harness {
    eps: f32,
    quiet: bool,
    failures: u32,
}

impl Harness {
    fn pass(&self, name: &str) {
        if !self.quiet {
            println!("PASS: {name}");
        }
    }

    fn expect_v3(&mut self, name: &str, actual: Vec3, expected: Vec3, tol: f32) {
        if ops::equals(actual, expected, tol) {
            self.pass(name);
        } else {
            println!("FAIL: {name}\n  expected={expected}\n  actual  ={actual}\n  tol={tol:.6e}");
            self.failures += 1;
        }
    }

    fn expect_float(&mut self, name: &str, actual: f32, expected: f32, tol: f32) {
        if (expected.is_nan() && actual.is_nan()) || (actual - expected).abs() <= tol {
            self.pass(name);
        } else {
            println!("FAIL: {name}\n  expected={expected:.8} actual={actual:.8} tol={tol:.6e}");
            self.failures += 1;
        }
    }

    fn check_from_points(&mut self) {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 6.0, 3.0);
        let expected = Vec3::new(3.0, 4.0, 0.0);
        self.expect_v3("v3_from_points basic", ops::from_points(a, b), expected, self.eps);

        let mut a2 = a;
        a2 = ops::from_points(a2, b);
        self.expect_v3("v3_from_points overlap dst==a", a2, expected, self.eps);
    }

    fn check_add(&mut self) {
        let a = Vec3::new(1.0, -2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, -6.0);
        let expected = Vec3::new(5.0, 3.0, -3.0);
        self.expect_v3("v3_add basic", ops::add(a, b), expected, self.eps);

        let mut a2 = a;
        a2 = ops::add(a2, b);
        self.expect_v3("v3_add overlap dst==a", a2, expected, self.eps);

        self.expect_v3("v3_add add zero", ops::add(a, Vec3::ZERO), a, self.eps);
    }

    fn check_subtract(&mut self) {
        let a = Vec3::new(10.0, 5.0, -2.0);
        let b = Vec3::new(3.0, 7.0, 4.0);
        let expected = Vec3::new(7.0, -2.0, -6.0);
        self.expect_v3("v3_subtract basic", ops::subtract(a, b), expected, self.eps);

        let mut b2 = b;
        b2 = ops::subtract(a, b2);
        self.expect_v3("v3_subtract overlap dst==b", b2, expected, self.eps);

        self.expect_v3("v3_subtract self", ops::subtract(a, a), Vec3::ZERO, self.eps);
    }

    fn check_dot_product(&mut self) {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, -5.0, 6.0);
        self.expect_float("v3_dot_product basic", ops::dot(a, b), 12.0, self.eps);
        self.expect_float(
            "v3_dot_product orthogonal",
            ops::dot(Vec3::X, Vec3::Y),
            0.0,
            self.eps,
        );
        self.expect_float("v3_dot_product self", ops::dot(a, a), 14.0, self.eps);
    }

    fn check_cross_product(&mut self) {
        self.expect_v3(
            "v3_cross_product x×y",
            ops::cross(Vec3::X, Vec3::Y),
            Vec3::Z,
            self.eps,
        );
        self.expect_v3(
            "v3_cross_product y×x",
            ops::cross(Vec3::Y, Vec3::X),
            -Vec3::Z,
            self.eps,
        );

        let mut a = Vec3::X;
        a = ops::cross(a, Vec3::Y);
        self.expect_v3("v3_cross_product overlap dst==a", a, Vec3::Z, self.eps);
    }

    fn check_scale(&mut self) {
        let mut v = Vec3::new(1.0, -2.0, 3.0);
        ops::scale(&mut v, 2.0);
        self.expect_v3("v3_scale by 2", v, Vec3::new(2.0, -4.0, 6.0), self.eps);
        ops::scale(&mut v, 0.5);
        self.expect_v3("v3_scale by 0.5", v, Vec3::new(1.0, -2.0, 3.0), self.eps);
        ops::scale(&mut v, 0.0);
        self.expect_v3("v3_scale by 0", v, Vec3::ZERO, self.eps);
    }

    fn check_length(&mut self) {
        self.expect_float(
            "v3_length 3-4-12",
            ops::length(Vec3::new(3.0, 4.0, 12.0)),
            13.0,
            1e-4,
        );
        self.expect_float("v3_length zero", ops::length(Vec3::ZERO), 0.0, self.eps);
        self.expect_float(
            "v3_length negative components",
            ops::length(Vec3::new(-1.0, -2.0, -2.0)),
            3.0,
            1e-4,
        );
    }

    fn check_normalize(&mut self) {
        let dst = ops::normalize(Vec3::new(3.0, 0.0, 4.0));
        self.expect_v3("v3_normalize 3-0-4", dst, Vec3::new(0.6, 0.0, 0.8), 1e-4);
        self.expect_float("v3_normalize length==1", ops::length(dst), 1.0, 1e-4);

        let mut v2 = Vec3::new(0.0, 5.0, 0.0);
        v2 = ops::normalize(v2);
        self.expect_v3("v3_normalize overlap dst==a", v2, Vec3::Y, 1e-4);

        self.expect_v3(
            "v3_normalize zero vector",
            ops::normalize(Vec3::ZERO),
            Vec3::ZERO,
            self.eps,
        );
    }

    fn check_angle_quick_and_angle(&mut self) {
        let (x, y) = (Vec3::X, Vec3::Y);
        self.expect_float("v3_angle_quick x,y cos=0", ops::angle_quick(x, y), 0.0, self.eps);
        self.expect_float("v3_angle x,y pi/2", ops::angle(x, y), FRAC_PI_2, 1e-4);

        let a = Vec3::X;
        self.expect_float("v3_angle_quick same cos=1", ops::angle_quick(a, a), 1.0, self.eps);
        self.expect_float("v3_angle same 0", ops::angle(a, a), 0.0, 1e-4);

        let c = -Vec3::X;
        self.expect_float(
            "v3_angle_quick opposite cos=-1",
            ops::angle_quick(a, c),
            -1.0,
            self.eps,
        );
        self.expect_float("v3_angle opposite pi", ops::angle(a, c), PI, 1e-4);
    }

    fn check_reflect(&mut self) {
        let v = Vec3::new(0.0, -1.0, 0.0);
        self.expect_v3("v3_reflect simple", ops::reflect(v, Vec3::Y), Vec3::Y, self.eps);
        self.expect_v3(
            "v3_reflect non-unit normal",
            ops::reflect(v, Vec3::new(0.0, 10.0, 0.0)),
            Vec3::Y,
            self.eps,
        );

        let mut v2 = Vec3::new(1.0, -1.0, 0.0);
        v2 = ops::reflect(v2, Vec3::Y);
        self.expect_v3(
            "v3_reflect overlap dst==v",
            v2,
            Vec3::new(1.0, 1.0, 0.0),
            self.eps,
        );
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.log {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    println!("=== v3test: 3D Math Library Unit Tests ===\n");

    let mut harness = Harness {
        eps: args.tolerance.abs(),
        quiet: args.quiet,
        failures: 0,
    };

    harness.check_from_points();
    harness.check_add();
    harness.check_subtract();
    harness.check_dot_product();
    harness.check_cross_product();
    harness.check_scale();
    harness.check_length();
    harness.check_normalize();
    harness.check_angle_quick_and_angle();
    harness.check_reflect();

    println!("\n=== Summary ===");
    if harness.failures == 0 {
        println!("ALL TESTS PASSED");
        ExitCode::SUCCESS
    } else {
        println!("FAILURES: {}", harness.failures);
        ExitCode::FAILURE
    }
}
