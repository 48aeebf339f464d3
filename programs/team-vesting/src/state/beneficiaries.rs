use anchor_lang::prelude::*;

use crate::constants::MAX_BENEFICIARIES;
use crate::error::VestingError;

/// A single beneficiary record stored in the beneficiary table PDA.
#[zero_copy]
#[derive(Debug, PartialEq, Eq)]
pub struct Allocation {
    pub beneficiary: Pubkey,
    /// Total ever granted; ceiling on lifetime payout.
    pub accumulated: u64,
    /// Cumulative amount already disbursed.
    pub paid: u64,
}

impl Allocation {
    pub const SIZE: usize = core::mem::size_of::<Allocation>();
}

/// PDA holding every beneficiary record (<= 128 entries).
/// Entries are append-only: never removed, never reordered.
#[account(zero_copy)]
pub struct BeneficiaryTable {
    pub count: u64,
    pub entries: [Allocation; MAX_BENEFICIARIES],
}

impl BeneficiaryTable {
    /// Space for discriminator + count + fixed entries array.
    pub const SPACE: usize = 8 + core::mem::size_of::<BeneficiaryTable>();

    pub fn len(&self) -> usize {
        self.count as usize
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn active(&self) -> &[Allocation] {
        &self.entries[..self.len()]
    }

    pub fn find(&self, beneficiary: &Pubkey) -> Option<&Allocation> {
        self.active().iter().find(|e| e.beneficiary == *beneficiary)
    }

    pub fn find_mut(&mut self, beneficiary: &Pubkey) -> Option<&mut Allocation> {
        let len = self.len();
        self.entries[..len]
            .iter_mut()
            .find(|e| e.beneficiary == *beneficiary)
    }

    pub fn remaining_capacity(&self) -> usize {
        MAX_BENEFICIARIES - self.len()
    }

    /// Adds `amount` to the beneficiary's allocation, appending a fresh
    /// record on first sight.
    pub fn credit(&mut self, beneficiary: Pubkey, amount: u64) -> Result<&Allocation> {
        let idx = match self.active().iter().position(|e| e.beneficiary == beneficiary) {
            Some(idx) => idx,
            None => {
                require!(
                    self.len() < MAX_BENEFICIARIES,
                    VestingError::BeneficiaryTableFull
                );
                let idx = self.len();
                self.entries[idx] = Allocation {
                    beneficiary,
                    accumulated: 0,
                    paid: 0,
                };
                self.count = self
                    .count
                    .checked_add(1)
                    .ok_or(VestingError::MathOverflow)?;
                idx
            }
        };

        let entry = &mut self.entries[idx];
        entry.accumulated = entry
            .accumulated
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        Ok(&self.entries[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck::Zeroable;

    #[test]
    fn layout_has_no_padding() {
        assert_eq!(Allocation::SIZE, 32 + 8 + 8);
        assert_eq!(
            core::mem::size_of::<BeneficiaryTable>(),
            8 + MAX_BENEFICIARIES * Allocation::SIZE
        );
    }

    #[test]
    fn credit_appends_then_tops_up() {
        let mut table = BeneficiaryTable::zeroed();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        table.credit(alice, 1000).unwrap();
        table.credit(bob, 2000).unwrap();
        let alice_entry = table.credit(alice, 500).unwrap();
        assert_eq!(alice_entry.accumulated, 1500);

        assert_eq!(table.len(), 2);
        assert_eq!(table.find(&bob).unwrap().accumulated, 2000);
        assert_eq!(table.find(&alice).unwrap().paid, 0);
        assert!(table.find(&Pubkey::new_unique()).is_none());
    }

    #[test]
    fn credit_rejects_new_entry_when_full() {
        let mut table = BeneficiaryTable::zeroed();
        let mut first = None;
        for _ in 0..MAX_BENEFICIARIES {
            let key = Pubkey::new_unique();
            first.get_or_insert(key);
            table.credit(key, 1).unwrap();
        }
        assert_eq!(table.remaining_capacity(), 0);
        assert!(table.credit(Pubkey::new_unique(), 1).is_err());

        // Existing beneficiaries can still be topped up.
        let first = first.unwrap();
        assert_eq!(table.credit(first, 1).unwrap().accumulated, 2);
        assert_eq!(table.len(), MAX_BENEFICIARIES);
    }

    #[test]
    fn credit_rejects_overflow() {
        let mut table = BeneficiaryTable::zeroed();
        let who = Pubkey::new_unique();
        table.credit(who, u64::MAX).unwrap();
        assert!(table.credit(who, 1).is_err());
        assert_eq!(table.find(&who).unwrap().accumulated, u64::MAX);
    }
}
