//! One module per benchmark
//!
//! Every module exposes a unit struct implementing [`Benchmark`](crate::Benchmark).
//! [`all`] is the single place where the catalog is enumerated.

use crate::TestFunction;

// Scalable functions
pub mod ackley;
pub mod alpine_n1;
pub mod chung_reynolds;
pub mod cosine_mixture;
pub mod dixon_price;
pub mod exponential;
pub mod griewank;
pub mod happy_cat;
pub mod levy;
pub mod qing;
pub mod quartic;
pub mod rastrigin;
pub mod rosenbrock;
pub mod rotated_hyper_ellipsoid;
pub mod salomon;
pub mod schwefel;
pub mod shubert3;
pub mod sphere;
pub mod step;
pub mod styblinski_tang;
pub mod sum_of_different_powers;
pub mod sum_squares;
pub mod trid;
pub mod zakharov;

// Fixed-dimension functions
pub mod beale;
pub mod bird;
pub mod bohachevsky1;
pub mod booth;
pub mod branin;
pub mod branin_rcos2;
pub mod bukin4;
pub mod bukin6;
pub mod carrom_table;
pub mod colville;
pub mod cross_in_tray;
pub mod deckkers_aarts;
pub mod drop_wave;
pub mod easom;
pub mod eggholder;
pub mod goldstein_price;
pub mod hartmann_3d;
pub mod himmelblau;
pub mod holder_table;
pub mod levy_n13;
pub mod matyas;
pub mod mccormick;
pub mod rosenbrock_modified;
pub mod schaffer_n2;
pub mod shekel;
pub mod shubert;
pub mod six_hump_camel;
pub mod three_hump_camel;

pub use ackley::Ackley;
pub use alpine_n1::AlpineN1;
pub use beale::Beale;
pub use bird::Bird;
pub use bohachevsky1::Bohachevsky1;
pub use booth::Booth;
pub use branin::Branin;
pub use branin_rcos2::BraninRcos2;
pub use bukin4::Bukin4;
pub use bukin6::Bukin6;
pub use carrom_table::CarromTable;
pub use chung_reynolds::ChungReynolds;
pub use colville::Colville;
pub use cosine_mixture::CosineMixture;
pub use cross_in_tray::CrossInTray;
pub use deckkers_aarts::DeckkersAarts;
pub use dixon_price::DixonPrice;
pub use drop_wave::DropWave;
pub use easom::Easom;
pub use eggholder::Eggholder;
pub use exponential::Exponential;
pub use goldstein_price::GoldsteinPrice;
pub use griewank::Griewank;
pub use happy_cat::HappyCat;
pub use hartmann_3d::Hartmann3D;
pub use himmelblau::Himmelblau;
pub use holder_table::HolderTable;
pub use levy::Levy;
pub use levy_n13::LevyN13;
pub use matyas::Matyas;
pub use mccormick::McCormick;
pub use qing::Qing;
pub use quartic::Quartic;
pub use rastrigin::Rastrigin;
pub use rosenbrock::Rosenbrock;
pub use rosenbrock_modified::RosenbrockModified;
pub use rotated_hyper_ellipsoid::RotatedHyperEllipsoid;
pub use salomon::Salomon;
pub use schaffer_n2::SchafferN2;
pub use schwefel::Schwefel;
pub use shekel::Shekel;
pub use shubert::Shubert;
pub use shubert3::Shubert3;
pub use six_hump_camel::SixHumpCamel;
pub use sphere::Sphere;
pub use step::Step;
pub use styblinski_tang::StyblinskiTang;
pub use sum_of_different_powers::SumOfDifferentPowers;
pub use sum_squares::SumSquares;
pub use three_hump_camel::ThreeHumpCamel;
pub use trid::Trid;
pub use zakharov::Zakharov;

/// Every benchmark of the catalog.
pub fn all() -> Vec<TestFunction> {
    vec![
        // Scalable
        TestFunction::of::<Ackley>(),
        TestFunction::of::<AlpineN1>(),
        TestFunction::of::<ChungReynolds>(),
        TestFunction::of::<CosineMixture>(),
        TestFunction::of::<DixonPrice>(),
        TestFunction::of::<Exponential>(),
        TestFunction::of::<Griewank>(),
        TestFunction::of::<HappyCat>(),
        TestFunction::of::<Levy>(),
        TestFunction::of::<Qing>(),
        TestFunction::of::<Quartic>(),
        TestFunction::of::<Rastrigin>(),
        TestFunction::of::<Rosenbrock>(),
        TestFunction::of::<RotatedHyperEllipsoid>(),
        TestFunction::of::<Salomon>(),
        TestFunction::of::<Schwefel>(),
        TestFunction::of::<Shubert3>(),
        TestFunction::of::<Sphere>(),
        TestFunction::of::<Step>(),
        TestFunction::of::<StyblinskiTang>(),
        TestFunction::of::<SumOfDifferentPowers>(),
        TestFunction::of::<SumSquares>(),
        TestFunction::of::<Trid>(),
        TestFunction::of::<Zakharov>(),
        // Fixed dimension
        TestFunction::of::<Beale>(),
        TestFunction::of::<Bird>(),
        TestFunction::of::<Bohachevsky1>(),
        TestFunction::of::<Booth>(),
        TestFunction::of::<Branin>(),
        TestFunction::of::<BraninRcos2>(),
        TestFunction::of::<Bukin4>(),
        TestFunction::of::<Bukin6>(),
        TestFunction::of::<CarromTable>(),
        TestFunction::of::<Colville>(),
        TestFunction::of::<CrossInTray>(),
        TestFunction::of::<DeckkersAarts>(),
        TestFunction::of::<DropWave>(),
        TestFunction::of::<Easom>(),
        TestFunction::of::<Eggholder>(),
        TestFunction::of::<GoldsteinPrice>(),
        TestFunction::of::<Hartmann3D>(),
        TestFunction::of::<Himmelblau>(),
        TestFunction::of::<HolderTable>(),
        TestFunction::of::<LevyN13>(),
        TestFunction::of::<Matyas>(),
        TestFunction::of::<McCormick>(),
        TestFunction::of::<RosenbrockModified>(),
        TestFunction::of::<SchafferN2>(),
        TestFunction::of::<Shekel>(),
        TestFunction::of::<Shubert>(),
        TestFunction::of::<SixHumpCamel>(),
        TestFunction::of::<ThreeHumpCamel>(),
    ]
}
