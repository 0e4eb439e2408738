use crate::types::OracleParams;
use crate::OracleHost;
use frame_support::pallet_prelude::{ConstU32, Hooks};
use sp_runtime::BuildStorage;
use std::cell::RefCell;

type Block = frame_system::mocking::MockBlock<Test>;
pub type AccountId = u64;

#[frame_support::runtime]
mod runtime {
    #[runtime::runtime]
    #[runtime::derive(
        RuntimeCall,
        RuntimeEvent,
        RuntimeError,
        RuntimeOrigin,
        RuntimeFreezeReason,
        RuntimeHoldReason,
        RuntimeSlashReason,
        RuntimeLockId,
        RuntimeTask,
        RuntimeViewFunction
    )]
    pub struct Test;

    #[runtime::pallet_index(0)]
    pub type System = frame_system::Pallet<Test>;
    #[runtime::pallet_index(1)]
    pub type Oracle = crate::Pallet<Test>;
}

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Block = Block;
    type AccountId = AccountId;
}

thread_local! {
    static BONDED: RefCell<Vec<(AccountId, u64)>> = RefCell::new(Vec::new());
    static SLASHED: RefCell<Vec<(AccountId, u32)>> = RefCell::new(Vec::new());
    static JAILED: RefCell<Vec<AccountId>> = RefCell::new(Vec::new());
    static REWARDED: RefCell<Vec<(AccountId, u64)>> = RefCell::new(Vec::new());
}

pub fn set_bonded(validators: Vec<(AccountId, u64)>) {
    BONDED.with(|b| *b.borrow_mut() = validators);
}

/// Installs `params` directly in the pallet's own storage, since governance
/// parameters aren't part of the `OracleHost` capability record.
pub fn set_params(params: OracleParams) {
    crate::Params::<Test>::put(params);
}

pub fn slashed() -> Vec<(AccountId, u32)> {
    SLASHED.with(|s| s.borrow().clone())
}

pub fn jailed() -> Vec<AccountId> {
    JAILED.with(|j| j.borrow().clone())
}

pub fn rewarded() -> Vec<(AccountId, u64)> {
    REWARDED.with(|r| r.borrow().clone())
}

pub struct TestHost;

impl OracleHost<AccountId, u64> for TestHost {
    fn bonded_validators_by_power() -> Vec<(AccountId, u64)> {
        BONDED.with(|b| b.borrow().clone())
    }

    fn power_reduction() -> u128 {
        1
    }

    fn slash_and_jail(validator: &AccountId, slash_fraction_percent: u32) {
        SLASHED.with(|s| s.borrow_mut().push((*validator, slash_fraction_percent)));
        JAILED.with(|j| j.borrow_mut().push(*validator));
    }

    fn reward_distribute(winners: &[(AccountId, u64)]) {
        REWARDED.with(|r| r.borrow_mut().extend_from_slice(winners));
    }
}

impl crate::pallet::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Host = TestHost;
    type MaxAcceptListLen = ConstU32<16>;
    type MaxPriceStamps = ConstU32<24>;
    type MaxMedianStamps = ConstU32<24>;
}

pub fn new_test_ext() -> sp_io::TestExternalities {
    BONDED.with(|b| b.borrow_mut().clear());
    SLASHED.with(|s| s.borrow_mut().clear());
    JAILED.with(|j| j.borrow_mut().clear());
    REWARDED.with(|r| r.borrow_mut().clear());

    let storage = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
    let mut ext = sp_io::TestExternalities::new(storage);
    ext.execute_with(|| {
        System::set_block_number(1);
        crate::Params::<Test>::put(OracleParams::default());
    });
    ext
}

/// Advances the mock chain to block `n`, firing `on_finalize` for every
/// block passed along the way, mirroring the real block-import path's call
/// order.
pub fn run_to_block(n: u64) {
    while System::block_number() < n {
        Oracle::on_finalize(System::block_number());
        System::set_block_number(System::block_number() + 1);
    }
}
