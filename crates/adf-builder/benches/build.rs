use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use adf_builder::{build, build_with_config, tree, Config, Document, Result};

fn lead(adf: &mut Document, vehicles: usize) -> Result<()> {
    adf.prospect(|prospect| {
        prospect.request_date("2024-06-15T10:00:00Z");
        for index in 0..vehicles {
            prospect.vehicle(|vehicle| {
                vehicle.year(2024).make("Toyota").model("Camry").stock(index);
                vehicle.price(25_000).currency("USD");
                Ok(())
            })?;
        }
        prospect.customer(|customer| {
            customer.contact(|contact| {
                contact.name("John Doe");
                contact.email("john@example.com");
                Ok(())
            })?;
            Ok(())
        })?;
        prospect.vendor(|vendor| {
            vendor.vendor_name("Example Motors");
            vendor.contact(|contact| {
                contact.name("Sales");
                contact.phone("555-0100");
                Ok(())
            })?;
            Ok(())
        })?;
        Ok(())
    })?;
    Ok(())
}

fn bench_minimal(c: &mut Criterion) {
    c.bench_function("adf_build_minimal", |b| {
        b.iter(|| build(|adf| lead(adf, black_box(1))))
    });
}

fn bench_many_vehicles(c: &mut Criterion) {
    c.bench_function("adf_build_50_vehicles_compact", |b| {
        b.iter(|| build_with_config(&Config::compact(), |adf| lead(adf, black_box(50))))
    });
}

fn bench_validate(c: &mut Criterion) {
    let Ok(document) = tree(|adf| lead(adf, 50)) else {
        return;
    };
    c.bench_function("adf_validate_50_vehicles", |b| {
        b.iter(|| black_box(&document).validate())
    });
}

criterion_group!(benches, bench_minimal, bench_many_vehicles, bench_validate);
criterion_main!(benches);
