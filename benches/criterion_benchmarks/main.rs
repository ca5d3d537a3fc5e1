use criterion::criterion_main;


criterion_main!(lcm::lcm, arithmetic::arithmetic);
