//! Kernel registry tests and property tests for the kernel laws

use super::*;
use proptest::prelude::*;

#[test]
fn test_kernel_names_round_trip() {
    for kernel in Kernel::ALL {
        assert_eq!(kernel.name().parse::<Kernel>().unwrap(), kernel);
        assert_eq!(kernel.to_string(), kernel.name());
    }
}

#[test]
fn test_kernel_parse_is_case_insensitive() {
    assert_eq!("LCG".parse::<Kernel>().unwrap(), Kernel::Lcg);
    assert_eq!("Branch".parse::<Kernel>().unwrap(), Kernel::Branch);
}

#[test]
fn test_unknown_kernel() {
    let err = "sieve".parse::<Kernel>().unwrap_err();
    assert!(matches!(err, BenchError::UnknownKernel(ref name) if name == "sieve"));
}

#[test]
fn test_fib_ignores_iterations() {
    let small = BenchConfig::default().with_iterations(0);
    assert_eq!(Kernel::Fib.run(&small).unwrap(), 1_134_903_170);
    assert!(!Kernel::Fib.uses_iterations());
    assert!(Kernel::Lcg.uses_iterations());
    assert!(Kernel::Branch.uses_iterations());
}

#[test]
fn test_run_uses_configured_bound() {
    let config = BenchConfig::default().with_iterations(1000);
    assert_eq!(Kernel::Lcg.run(&config).unwrap(), 3_926_946_568);
    assert_eq!(Kernel::Branch.run(&config).unwrap(), 334);
}

#[test]
fn test_run_is_deterministic() {
    let config = BenchConfig::default().with_iterations(12_345);
    for kernel in Kernel::ALL {
        assert_eq!(kernel.run(&config).unwrap(), kernel.run(&config).unwrap());
    }
}

proptest! {
    #[test]
    fn prop_count_div3_is_ceil_third(n in 0u64..20_000) {
        prop_assert_eq!(branch::count_div3(n), n.div_ceil(3));
    }

    #[test]
    fn prop_lcg_matches_iterator(n in 1u64..2_000) {
        let last = lcg::Lcg::default().nth((n - 1) as usize).unwrap();
        prop_assert_eq!(lcg::lcg(n), last);
    }

    #[test]
    fn prop_lcg_extends_by_one_step(n in 0u64..2_000) {
        prop_assert_eq!(lcg::lcg(n + 1), lcg::step(lcg::lcg(n)));
    }

    #[test]
    fn prop_fib_recurrence(n in 2u32..=fib::MAX_FIB_INDEX) {
        let lhs = fib::fib(n).unwrap();
        let rhs = fib::fib(n - 1).unwrap() + fib::fib(n - 2).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn prop_fib_overflow_past_max(n in (fib::MAX_FIB_INDEX + 1)..200u32) {
        prop_assert!(fib::fib(n).is_err());
    }
}
