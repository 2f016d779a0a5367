#![feature(test)]

extern crate test;

use factperm::lex::LexPerm;
use factperm::verify::Verifier;
use factperm::SwapIndices;
use test::{black_box, Bencher};

macro_rules! gen_perm {
    ($group:ident, $($x:literal),+ $(,)?) => {
        $(
            paste::paste! {
                #[bench]
                fn [<swap_ $x>](b: &mut Bencher) {
                    b.iter(|| {
                        for x in SwapIndices::new($x) {
                            black_box(x);
                        }
                    });
                }

                #[bench]
                fn [<lex_ $x>](b: &mut Bencher) {
                    let source: Vec<usize> = (0..$x).collect();
                    b.iter(|| {
                        for x in LexPerm::new(&source) {
                            black_box(x);
                        }
                    });
                }
            }
        )+
    };
}

gen_perm!(group, 3, 4, 5, 6, 7, 8);

#[bench]
fn verify_to_200(b: &mut Bencher) {
    b.iter(|| {
        let mut verifier = Verifier::new();
        while verifier.record().len() < 200 {
            black_box(verifier.step().unwrap());
        }
    });
}
