use anchor_lang::prelude::*;

/// Per-recipient release record PDA (`[RELEASE_SEED, recipient]`).
///
/// `amount == 0` means the recipient was never paid. Once non-zero the
/// record is frozen.
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReleaseRecord {
    pub recipient: Pubkey,
    pub amount: u64,
    pub bump: u8,
}

impl ReleaseRecord {
    pub const SIZE: usize =
        32 + // recipient
        8 +  // amount
        1;   // bump

    pub fn is_claimed(&self) -> bool {
        self.amount != 0
    }

    /// Only `LedgerState::commit_release` writes a record, after checking
    /// `is_claimed()`.
    pub(crate) fn mark_released(&mut self, recipient: Pubkey, amount: u64) {
        self.recipient = recipient;
        self.amount = amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_record_is_unclaimed() {
        let rec = ReleaseRecord::default();
        assert!(!rec.is_claimed());
        assert_eq!(rec.amount, 0);
    }

    #[test]
    fn marked_record_is_claimed() {
        let recipient = Pubkey::new_from_array([9; 32]);
        let mut rec = ReleaseRecord::default();
        rec.mark_released(recipient, 42);
        assert!(rec.is_claimed());
        assert_eq!(rec.recipient, recipient);
        assert_eq!(rec.amount, 42);
    }

    #[test]
    fn size_matches_serialized_layout() {
        let rec = ReleaseRecord {
            recipient: Pubkey::new_from_array([1; 32]),
            amount: u64::MAX,
            bump: 255,
        };
        let mut buf = Vec::new();
        rec.serialize(&mut buf).unwrap();
        assert_eq!(buf.len(), ReleaseRecord::SIZE);
    }
}
