//! The instruction registry.
//!
//! One ordered list, [`instructions!`] below, is the only place an
//! instruction is named. It produces the [`Instruction`] enumeration, the
//! display names and the test dispatch table, so they cannot drift apart.
//! Entries without a test are placeholders that report
//! [`Outcome::Unimplemented`].

use std::fmt;
use std::str::FromStr;

use crate::catalogue::*;
use crate::error::{unknown_instruction, HarnessError, Result};

struct Entry {
    name: &'static str,
    test: TestFn,
    implemented: bool,
}

macro_rules! test_or_pending {
    () => {
        pending
    };
    ($test:path) => {
        $test
    };
}

macro_rules! has_test {
    () => {
        false
    };
    ($test:path) => {
        true
    };
}

macro_rules! instructions {
    ($($name:ident $(=> $test:path)?,)*) => {
        /// One NEON intrinsic, in catalogue order.
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Instruction {
            $($name,)*
        }

        impl Instruction {
            /// Every instruction, in catalogue order.
            pub const ALL: &'static [Instruction] = &[$(Instruction::$name,)*];
        }

        // Indexed by discriminant.
        const ENTRIES: &[Entry] = &[$(
            Entry {
                name: stringify!($name),
                test: test_or_pending!($($test)?),
                implemented: has_test!($($test)?),
            },
        )*];
    };
}

impl Instruction {
    /// Catalogue size; one past the last index.
    pub const COUNT: usize = Instruction::ALL.len();

    fn entry(self) -> &'static Entry {
        &ENTRIES[self as usize]
    }

    /// Position in the catalogue.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The intrinsic's name, e.g. `vaddq_s8`.
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    pub fn test(self) -> TestFn {
        self.entry().test
    }

    /// Whether the instruction has a reference, as opposed to a placeholder.
    pub fn is_implemented(self) -> bool {
        self.entry().implemented
    }

    /// Looks an instruction up by its intrinsic name.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::UnknownInstruction`] if no instruction has
    /// that name.
    pub fn from_name(name: &str) -> Result<Self> {
        ENTRIES
            .iter()
            .position(|entry| entry.name == name)
            .map(|index| Instruction::ALL[index])
            .ok_or_else(|| unknown_instruction(name))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Instruction {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self> {
        Instruction::from_name(s)
    }
}

instructions! {
    vadd_s8 => test_vadd_s8,
    vadd_s16 => test_vadd_s16,
    vadd_s32 => test_vadd_s32,
    vadd_f32 => test_vadd_f32,
    vadd_u8 => test_vadd_u8,
    vadd_u16 => test_vadd_u16,
    vadd_u32 => test_vadd_u32,
    vadd_s64 => test_vadd_s64,
    vadd_u64 => test_vadd_u64,
    vaddq_s8 => test_vaddq_s8,
    vaddq_s16 => test_vaddq_s16,
    vaddq_s32 => test_vaddq_s32,
    vaddq_s64 => test_vaddq_s64,
    vaddq_f32 => test_vaddq_f32,
    vaddq_u8 => test_vaddq_u8,
    vaddq_u16 => test_vaddq_u16,
    vaddq_u32 => test_vaddq_u32,
    vaddq_u64 => test_vaddq_u64,
    vaddl_s8 => test_vaddl_s8,
    vaddl_s16 => test_vaddl_s16,
    vaddl_s32 => test_vaddl_s32,
    vaddl_u8 => test_vaddl_u8,
    vaddl_u16 => test_vaddl_u16,
    vaddl_u32 => test_vaddl_u32,
    vaddw_s8 => test_vaddw_s8,
    vaddw_s16 => test_vaddw_s16,
    vaddw_s32 => test_vaddw_s32,
    vaddw_u8 => test_vaddw_u8,
    vaddw_u16 => test_vaddw_u16,
    vaddw_u32 => test_vaddw_u32,
    vhadd_s8 => test_vhadd_s8,
    vhadd_s16 => test_vhadd_s16,
    vhadd_s32 => test_vhadd_s32,
    vhadd_u8 => test_vhadd_u8,
    vhadd_u16 => test_vhadd_u16,
    vhadd_u32 => test_vhadd_u32,
    vhaddq_s8 => test_vhaddq_s8,
    vhaddq_s16 => test_vhaddq_s16,
    vhaddq_s32 => test_vhaddq_s32,
    vhaddq_u8 => test_vhaddq_u8,
    vhaddq_u16 => test_vhaddq_u16,
    vhaddq_u32 => test_vhaddq_u32,
    vrhadd_s8 => test_vrhadd_s8,
    vrhadd_s16 => test_vrhadd_s16,
    vrhadd_s32 => test_vrhadd_s32,
    vrhadd_u8 => test_vrhadd_u8,
    vrhadd_u16 => test_vrhadd_u16,
    vrhadd_u32 => test_vrhadd_u32,
    vrhaddq_s8 => test_vrhaddq_s8,
    vrhaddq_s16 => test_vrhaddq_s16,
    vrhaddq_s32 => test_vrhaddq_s32,
    vrhaddq_u8 => test_vrhaddq_u8,
    vrhaddq_u16 => test_vrhaddq_u16,
    vrhaddq_u32 => test_vrhaddq_u32,
    vqadd_s8 => test_vqadd_s8,
    vqadd_s16 => test_vqadd_s16,
    vqadd_s32 => test_vqadd_s32,
    vqadd_s64 => test_vqadd_s64,
    vqadd_u8 => test_vqadd_u8,
    vqadd_u16 => test_vqadd_u16,
    vqadd_u32 => test_vqadd_u32,
    vqadd_u64 => test_vqadd_u64,
    vqaddq_s8 => test_vqaddq_s8,
    vqaddq_s16 => test_vqaddq_s16,
    vqaddq_s32 => test_vqaddq_s32,
    vqaddq_s64 => test_vqaddq_s64,
    vqaddq_u8 => test_vqaddq_u8,
    vqaddq_u16 => test_vqaddq_u16,
    vqaddq_u32 => test_vqaddq_u32,
    vqaddq_u64 => test_vqaddq_u64,
    vaddhn_s16 => test_vaddhn_s16,
    vaddhn_s32 => test_vaddhn_s32,
    vaddhn_s64 => test_vaddhn_s64,
    vaddhn_u16 => test_vaddhn_u16,
    vaddhn_u32 => test_vaddhn_u32,
    vaddhn_u64 => test_vaddhn_u64,
    vraddhn_s16 => test_vraddhn_s16,
    vraddhn_s32 => test_vraddhn_s32,
    vraddhn_s64 => test_vraddhn_s64,
    vraddhn_u16 => test_vraddhn_u16,
    vraddhn_u32 => test_vraddhn_u32,
    vraddhn_u64 => test_vraddhn_u64,
    vmul_s8 => test_vmul_s8,
    vmul_s16 => test_vmul_s16,
    vmul_s32 => test_vmul_s32,
    vmul_f32 => test_vmul_f32,
    vmul_u8 => test_vmul_u8,
    vmul_u16 => test_vmul_u16,
    vmul_u32 => test_vmul_u32,
    vmulq_s8 => test_vmulq_s8,
    vmulq_s16 => test_vmulq_s16,
    vmulq_s32 => test_vmulq_s32,
    vmulq_f32 => test_vmulq_f32,
    vmulq_u8 => test_vmulq_u8,
    vmulq_u16 => test_vmulq_u16,
    vmulq_u32 => test_vmulq_u32,
    vqdmulh_s16 => test_vqdmulh_s16,
    vqdmulh_s32 => test_vqdmulh_s32,
    vqdmulhq_s16 => test_vqdmulhq_s16,
    vqdmulhq_s32 => test_vqdmulhq_s32,
    vqrdmulh_s16 => test_vqrdmulh_s16,
    vqrdmulh_s32 => test_vqrdmulh_s32,
    vqrdmulhq_s16 => test_vqrdmulhq_s16,
    vqrdmulhq_s32 => test_vqrdmulhq_s32,
    vqrdmlah_s16,
    vqrdmlah_s32,
    vqrdmlahq_s16,
    vqrdmlahq_s32,
    vqrdmlsh_s16,
    vqrdmlsh_s32,
    vqrdmlshq_s16,
    vqrdmlshq_s32,
    vmull_s8 => test_vmull_s8,
    vmull_s16 => test_vmull_s16,
    vmull_s32 => test_vmull_s32,
    vmull_u8 => test_vmull_u8,
    vmull_u16 => test_vmull_u16,
    vmull_u32 => test_vmull_u32,
    vqdmull_s16 => test_vqdmull_s16,
    vqdmull_s32 => test_vqdmull_s32,
    vmla_s8 => test_vmla_s8,
    vmla_s16 => test_vmla_s16,
    vmla_s32 => test_vmla_s32,
    vmla_f32 => test_vmla_f32,
    vmla_u8 => test_vmla_u8,
    vmla_u16 => test_vmla_u16,
    vmla_u32 => test_vmla_u32,
    vmlaq_s8 => test_vmlaq_s8,
    vmlaq_s16 => test_vmlaq_s16,
    vmlaq_s32 => test_vmlaq_s32,
    vmlaq_f32 => test_vmlaq_f32,
    vmlaq_u8 => test_vmlaq_u8,
    vmlaq_u16 => test_vmlaq_u16,
    vmlaq_u32 => test_vmlaq_u32,
    vmlal_s8 => test_vmlal_s8,
    vmlal_s16 => test_vmlal_s16,
    vmlal_s32 => test_vmlal_s32,
    vmlal_u8 => test_vmlal_u8,
    vmlal_u16 => test_vmlal_u16,
    vmlal_u32 => test_vmlal_u32,
    vqdmlal_s16,
    vqdmlal_s32,
    vmls_s8 => test_vmls_s8,
    vmls_s16 => test_vmls_s16,
    vmls_s32 => test_vmls_s32,
    vmls_f32 => test_vmls_f32,
    vmls_u8 => test_vmls_u8,
    vmls_u16 => test_vmls_u16,
    vmls_u32 => test_vmls_u32,
    vmlsq_s8 => test_vmlsq_s8,
    vmlsq_s16 => test_vmlsq_s16,
    vmlsq_s32 => test_vmlsq_s32,
    vmlsq_f32 => test_vmlsq_f32,
    vmlsq_u8 => test_vmlsq_u8,
    vmlsq_u16 => test_vmlsq_u16,
    vmlsq_u32 => test_vmlsq_u32,
    vmlsl_s8 => test_vmlsl_s8,
    vmlsl_s16 => test_vmlsl_s16,
    vmlsl_s32 => test_vmlsl_s32,
    vmlsl_u8 => test_vmlsl_u8,
    vmlsl_u16 => test_vmlsl_u16,
    vmlsl_u32 => test_vmlsl_u32,
    vqdmlsl_s16,
    vqdmlsl_s32,
    vfma_f32 => test_vfma_f32,
    vfmaq_f32 => test_vfmaq_f32,
    vfms_f32 => test_vfms_f32,
    vfmsq_f32 => test_vfmsq_f32,
    vrndn_f32 => test_vrndn_f32,
    vrndnq_f32 => test_vrndnq_f32,
    vrnda_f32 => test_vrnda_f32,
    vrndaq_f32 => test_vrndaq_f32,
    vrndp_f32 => test_vrndp_f32,
    vrndpq_f32 => test_vrndpq_f32,
    vrndm_f32 => test_vrndm_f32,
    vrndmq_f32 => test_vrndmq_f32,
    vrndx_f32 => test_vrndx_f32,
    vrndxq_f32 => test_vrndxq_f32,
    vrnd_f32 => test_vrnd_f32,
    vrndq_f32 => test_vrndq_f32,
    vsub_s8 => test_vsub_s8,
    vsub_s16 => test_vsub_s16,
    vsub_s32 => test_vsub_s32,
    vsub_f32 => test_vsub_f32,
    vsub_u8 => test_vsub_u8,
    vsub_u16 => test_vsub_u16,
    vsub_u32 => test_vsub_u32,
    vsub_s64 => test_vsub_s64,
    vsub_u64 => test_vsub_u64,
    vsubq_s8 => test_vsubq_s8,
    vsubq_s16 => test_vsubq_s16,
    vsubq_s32 => test_vsubq_s32,
    vsubq_s64 => test_vsubq_s64,
    vsubq_f32 => test_vsubq_f32,
    vsubq_u8 => test_vsubq_u8,
    vsubq_u16 => test_vsubq_u16,
    vsubq_u32 => test_vsubq_u32,
    vsubq_u64 => test_vsubq_u64,
    vsubl_s8 => test_vsubl_s8,
    vsubl_s16 => test_vsubl_s16,
    vsubl_s32 => test_vsubl_s32,
    vsubl_u8 => test_vsubl_u8,
    vsubl_u16 => test_vsubl_u16,
    vsubl_u32 => test_vsubl_u32,
    vsubw_s8 => test_vsubw_s8,
    vsubw_s16 => test_vsubw_s16,
    vsubw_s32 => test_vsubw_s32,
    vsubw_u8 => test_vsubw_u8,
    vsubw_u16 => test_vsubw_u16,
    vsubw_u32 => test_vsubw_u32,
    vhsub_s8 => test_vhsub_s8,
    vhsub_s16 => test_vhsub_s16,
    vhsub_s32 => test_vhsub_s32,
    vhsub_u8 => test_vhsub_u8,
    vhsub_u16 => test_vhsub_u16,
    vhsub_u32 => test_vhsub_u32,
    vhsubq_s8 => test_vhsubq_s8,
    vhsubq_s16 => test_vhsubq_s16,
    vhsubq_s32 => test_vhsubq_s32,
    vhsubq_u8 => test_vhsubq_u8,
    vhsubq_u16 => test_vhsubq_u16,
    vhsubq_u32 => test_vhsubq_u32,
    vqsub_s8 => test_vqsub_s8,
    vqsub_s16 => test_vqsub_s16,
    vqsub_s32 => test_vqsub_s32,
    vqsub_s64 => test_vqsub_s64,
    vqsub_u8 => test_vqsub_u8,
    vqsub_u16 => test_vqsub_u16,
    vqsub_u32 => test_vqsub_u32,
    vqsub_u64 => test_vqsub_u64,
    vqsubq_s8 => test_vqsubq_s8,
    vqsubq_s16 => test_vqsubq_s16,
    vqsubq_s32 => test_vqsubq_s32,
    vqsubq_s64 => test_vqsubq_s64,
    vqsubq_u8 => test_vqsubq_u8,
    vqsubq_u16 => test_vqsubq_u16,
    vqsubq_u32 => test_vqsubq_u32,
    vqsubq_u64 => test_vqsubq_u64,
    vsubhn_s16 => test_vsubhn_s16,
    vsubhn_s32 => test_vsubhn_s32,
    vsubhn_s64 => test_vsubhn_s64,
    vsubhn_u16 => test_vsubhn_u16,
    vsubhn_u32 => test_vsubhn_u32,
    vsubhn_u64 => test_vsubhn_u64,
    vrsubhn_s16 => test_vrsubhn_s16,
    vrsubhn_s32 => test_vrsubhn_s32,
    vrsubhn_s64 => test_vrsubhn_s64,
    vrsubhn_u16 => test_vrsubhn_u16,
    vrsubhn_u32 => test_vrsubhn_u32,
    vrsubhn_u64 => test_vrsubhn_u64,
    vceq_s8 => test_vceq_s8,
    vceq_s16 => test_vceq_s16,
    vceq_s32 => test_vceq_s32,
    vceq_f32 => test_vceq_f32,
    vceq_u8 => test_vceq_u8,
    vceq_u16 => test_vceq_u16,
    vceq_u32 => test_vceq_u32,
    vceqq_s8 => test_vceqq_s8,
    vceqq_s16 => test_vceqq_s16,
    vceqq_s32 => test_vceqq_s32,
    vceqq_f32 => test_vceqq_f32,
    vceqq_u8 => test_vceqq_u8,
    vceqq_u16 => test_vceqq_u16,
    vceqq_u32 => test_vceqq_u32,
    vcge_s8 => test_vcge_s8,
    vcge_s16 => test_vcge_s16,
    vcge_s32 => test_vcge_s32,
    vcge_f32 => test_vcge_f32,
    vcge_u8 => test_vcge_u8,
    vcge_u16 => test_vcge_u16,
    vcge_u32 => test_vcge_u32,
    vcgeq_s8 => test_vcgeq_s8,
    vcgeq_s16 => test_vcgeq_s16,
    vcgeq_s32 => test_vcgeq_s32,
    vcgeq_f32 => test_vcgeq_f32,
    vcgeq_u8 => test_vcgeq_u8,
    vcgeq_u16 => test_vcgeq_u16,
    vcgeq_u32 => test_vcgeq_u32,
    vcle_s8 => test_vcle_s8,
    vcle_s16 => test_vcle_s16,
    vcle_s32 => test_vcle_s32,
    vcle_f32 => test_vcle_f32,
    vcle_u8 => test_vcle_u8,
    vcle_u16 => test_vcle_u16,
    vcle_u32 => test_vcle_u32,
    vcleq_s8 => test_vcleq_s8,
    vcleq_s16 => test_vcleq_s16,
    vcleq_s32 => test_vcleq_s32,
    vcleq_f32 => test_vcleq_f32,
    vcleq_u8 => test_vcleq_u8,
    vcleq_u16 => test_vcleq_u16,
    vcleq_u32 => test_vcleq_u32,
    vcgt_s8 => test_vcgt_s8,
    vcgt_s16 => test_vcgt_s16,
    vcgt_s32 => test_vcgt_s32,
    vcgt_f32 => test_vcgt_f32,
    vcgt_u8 => test_vcgt_u8,
    vcgt_u16 => test_vcgt_u16,
    vcgt_u32 => test_vcgt_u32,
    vcgtq_s8 => test_vcgtq_s8,
    vcgtq_s16 => test_vcgtq_s16,
    vcgtq_s32 => test_vcgtq_s32,
    vcgtq_f32 => test_vcgtq_f32,
    vcgtq_u8 => test_vcgtq_u8,
    vcgtq_u16 => test_vcgtq_u16,
    vcgtq_u32 => test_vcgtq_u32,
    vclt_s8 => test_vclt_s8,
    vclt_s16 => test_vclt_s16,
    vclt_s32 => test_vclt_s32,
    vclt_f32 => test_vclt_f32,
    vclt_u8 => test_vclt_u8,
    vclt_u16 => test_vclt_u16,
    vclt_u32 => test_vclt_u32,
    vcltq_s8 => test_vcltq_s8,
    vcltq_s16 => test_vcltq_s16,
    vcltq_s32 => test_vcltq_s32,
    vcltq_f32 => test_vcltq_f32,
    vcltq_u8 => test_vcltq_u8,
    vcltq_u16 => test_vcltq_u16,
    vcltq_u32 => test_vcltq_u32,
    vabs_s8 => test_vabs_s8,
    vabs_s16 => test_vabs_s16,
    vabs_s32 => test_vabs_s32,
    vabs_f32 => test_vabs_f32,
    vabsq_s8 => test_vabsq_s8,
    vabsq_s16 => test_vabsq_s16,
    vabsq_s32 => test_vabsq_s32,
    vabsq_f32 => test_vabsq_f32,
    vqabs_s8 => test_vqabs_s8,
    vqabs_s16 => test_vqabs_s16,
    vqabs_s32 => test_vqabs_s32,
    vqabsq_s8 => test_vqabsq_s8,
    vqabsq_s16 => test_vqabsq_s16,
    vqabsq_s32 => test_vqabsq_s32,
    vcage_f32 => test_vcage_f32,
    vcageq_f32 => test_vcageq_f32,
    vcale_f32 => test_vcale_f32,
    vcaleq_f32 => test_vcaleq_f32,
    vcagt_f32 => test_vcagt_f32,
    vcagtq_f32 => test_vcagtq_f32,
    vcalt_f32 => test_vcalt_f32,
    vcaltq_f32 => test_vcaltq_f32,
    vtst_s8 => test_vtst_s8,
    vtst_s16 => test_vtst_s16,
    vtst_s32 => test_vtst_s32,
    vtst_u8 => test_vtst_u8,
    vtst_u16 => test_vtst_u16,
    vtst_u32 => test_vtst_u32,
    vtstq_s8 => test_vtstq_s8,
    vtstq_s16 => test_vtstq_s16,
    vtstq_s32 => test_vtstq_s32,
    vtstq_u8 => test_vtstq_u8,
    vtstq_u16 => test_vtstq_u16,
    vtstq_u32 => test_vtstq_u32,
    vabd_s8 => test_vabd_s8,
    vabd_s16 => test_vabd_s16,
    vabd_s32 => test_vabd_s32,
    vabd_f32 => test_vabd_f32,
    vabd_u8 => test_vabd_u8,
    vabd_u16 => test_vabd_u16,
    vabd_u32 => test_vabd_u32,
    vabdq_s8 => test_vabdq_s8,
    vabdq_s16 => test_vabdq_s16,
    vabdq_s32 => test_vabdq_s32,
    vabdq_f32 => test_vabdq_f32,
    vabdq_u8 => test_vabdq_u8,
    vabdq_u16 => test_vabdq_u16,
    vabdq_u32 => test_vabdq_u32,
    vabdl_s8 => test_vabdl_s8,
    vabdl_s16 => test_vabdl_s16,
    vabdl_s32 => test_vabdl_s32,
    vabdl_u8 => test_vabdl_u8,
    vabdl_u16 => test_vabdl_u16,
    vabdl_u32 => test_vabdl_u32,
    vaba_s8 => test_vaba_s8,
    vaba_s16 => test_vaba_s16,
    vaba_s32 => test_vaba_s32,
    vaba_u8 => test_vaba_u8,
    vaba_u16 => test_vaba_u16,
    vaba_u32 => test_vaba_u32,
    vabaq_s8 => test_vabaq_s8,
    vabaq_s16 => test_vabaq_s16,
    vabaq_s32 => test_vabaq_s32,
    vabaq_u8 => test_vabaq_u8,
    vabaq_u16 => test_vabaq_u16,
    vabaq_u32 => test_vabaq_u32,
    vabal_s8 => test_vabal_s8,
    vabal_s16 => test_vabal_s16,
    vabal_s32 => test_vabal_s32,
    vabal_u8 => test_vabal_u8,
    vabal_u16 => test_vabal_u16,
    vabal_u32 => test_vabal_u32,
    vmax_s8 => test_vmax_s8,
    vmax_s16 => test_vmax_s16,
    vmax_s32 => test_vmax_s32,
    vmax_f32 => test_vmax_f32,
    vmax_u8 => test_vmax_u8,
    vmax_u16 => test_vmax_u16,
    vmax_u32 => test_vmax_u32,
    vmaxq_s8 => test_vmaxq_s8,
    vmaxq_s16 => test_vmaxq_s16,
    vmaxq_s32 => test_vmaxq_s32,
    vmaxq_f32 => test_vmaxq_f32,
    vmaxnm_f32 => test_vmaxnm_f32,
    vmaxnmq_f32 => test_vmaxnmq_f32,
    vminnm_f32 => test_vminnm_f32,
    vminnmq_f32 => test_vminnmq_f32,
    vmaxq_u8 => test_vmaxq_u8,
    vmaxq_u16 => test_vmaxq_u16,
    vmaxq_u32 => test_vmaxq_u32,
    vmin_s8 => test_vmin_s8,
    vmin_s16 => test_vmin_s16,
    vmin_s32 => test_vmin_s32,
    vmin_f32 => test_vmin_f32,
    vmin_u8 => test_vmin_u8,
    vmin_u16 => test_vmin_u16,
    vmin_u32 => test_vmin_u32,
    vminq_s8 => test_vminq_s8,
    vminq_s16 => test_vminq_s16,
    vminq_s32 => test_vminq_s32,
    vminq_f32 => test_vminq_f32,
    vminq_u8 => test_vminq_u8,
    vminq_u16 => test_vminq_u16,
    vminq_u32 => test_vminq_u32,
    vpadd_s8 => test_vpadd_s8,
    vpadd_s16 => test_vpadd_s16,
    vpadd_s32 => test_vpadd_s32,
    vpadd_f32 => test_vpadd_f32,
    vpadd_u8 => test_vpadd_u8,
    vpadd_u16 => test_vpadd_u16,
    vpadd_u32 => test_vpadd_u32,
    vpaddl_s8 => test_vpaddl_s8,
    vpaddl_s16 => test_vpaddl_s16,
    vpaddl_s32 => test_vpaddl_s32,
    vpaddl_u8 => test_vpaddl_u8,
    vpaddl_u16 => test_vpaddl_u16,
    vpaddl_u32 => test_vpaddl_u32,
    vpaddlq_s8 => test_vpaddlq_s8,
    vpaddlq_s16 => test_vpaddlq_s16,
    vpaddlq_s32 => test_vpaddlq_s32,
    vpaddlq_u8 => test_vpaddlq_u8,
    vpaddlq_u16 => test_vpaddlq_u16,
    vpaddlq_u32 => test_vpaddlq_u32,
    vpadal_s8 => test_vpadal_s8,
    vpadal_s16 => test_vpadal_s16,
    vpadal_s32 => test_vpadal_s32,
    vpadal_u8 => test_vpadal_u8,
    vpadal_u16 => test_vpadal_u16,
    vpadal_u32 => test_vpadal_u32,
    vpadalq_s8 => test_vpadalq_s8,
    vpadalq_s16 => test_vpadalq_s16,
    vpadalq_s32 => test_vpadalq_s32,
    vpadalq_u8 => test_vpadalq_u8,
    vpadalq_u16 => test_vpadalq_u16,
    vpadalq_u32 => test_vpadalq_u32,
    vpmax_s8 => test_vpmax_s8,
    vpmax_s16 => test_vpmax_s16,
    vpmax_s32 => test_vpmax_s32,
    vpmax_f32 => test_vpmax_f32,
    vpmax_u8 => test_vpmax_u8,
    vpmax_u16 => test_vpmax_u16,
    vpmax_u32 => test_vpmax_u32,
    vpmin_s8 => test_vpmin_s8,
    vpmin_s16 => test_vpmin_s16,
    vpmin_s32 => test_vpmin_s32,
    vpmin_f32 => test_vpmin_f32,
    vpmin_u8 => test_vpmin_u8,
    vpmin_u16 => test_vpmin_u16,
    vpmin_u32 => test_vpmin_u32,
    vrecps_f32 => test_vrecps_f32,
    vrecpsq_f32 => test_vrecpsq_f32,
    vrsqrts_f32 => test_vrsqrts_f32,
    vrsqrtsq_f32 => test_vrsqrtsq_f32,
    vshl_s8 => test_vshl_s8,
    vshl_s16 => test_vshl_s16,
    vshl_s32 => test_vshl_s32,
    vshl_s64 => test_vshl_s64,
    vshl_u8 => test_vshl_u8,
    vshl_u16 => test_vshl_u16,
    vshl_u32 => test_vshl_u32,
    vshl_u64 => test_vshl_u64,
    vshlq_s8 => test_vshlq_s8,
    vshlq_s16 => test_vshlq_s16,
    vshlq_s32 => test_vshlq_s32,
    vshlq_s64 => test_vshlq_s64,
    vshlq_u8 => test_vshlq_u8,
    vshlq_u16 => test_vshlq_u16,
    vshlq_u32 => test_vshlq_u32,
    vshlq_u64 => test_vshlq_u64,
    vrshl_s8,
    vrshl_s16,
    vrshl_s32,
    vrshl_s64,
    vrshl_u8,
    vrshl_u16,
    vrshl_u32,
    vrshl_u64,
    vrshlq_s8,
    vrshlq_s16,
    vrshlq_s32,
    vrshlq_s64,
    vrshlq_u8,
    vrshlq_u16,
    vrshlq_u32,
    vrshlq_u64,
    vqshl_s8,
    vqshl_s16,
    vqshl_s32,
    vqshl_s64,
    vqshl_u8,
    vqshl_u16,
    vqshl_u32,
    vqshl_u64,
    vqshlq_s8,
    vqshlq_s16,
    vqshlq_s32,
    vqshlq_s64,
    vqshlq_u8,
    vqshlq_u16,
    vqshlq_u32,
    vqshlq_u64,
    vqrshl_s8,
    vqrshl_s16,
    vqrshl_s32,
    vqrshl_s64,
    vqrshl_u8,
    vqrshl_u16,
    vqrshl_u32,
    vqrshl_u64,
    vqrshlq_s8,
    vqrshlq_s16,
    vqrshlq_s32,
    vqrshlq_s64,
    vqrshlq_u8,
    vqrshlq_u16,
    vqrshlq_u32,
    vqrshlq_u64,
    vshr_n_s8 => test_vshr_n_s8,
    vshr_n_s16 => test_vshr_n_s16,
    vshr_n_s32 => test_vshr_n_s32,
    vshr_n_s64 => test_vshr_n_s64,
    vshr_n_u8 => test_vshr_n_u8,
    vshr_n_u16 => test_vshr_n_u16,
    vshr_n_u32 => test_vshr_n_u32,
    vshr_n_u64 => test_vshr_n_u64,
    vshrq_n_s8 => test_vshrq_n_s8,
    vshrq_n_s16 => test_vshrq_n_s16,
    vshrq_n_s32 => test_vshrq_n_s32,
    vshrq_n_s64 => test_vshrq_n_s64,
    vshrq_n_u8 => test_vshrq_n_u8,
    vshrq_n_u16 => test_vshrq_n_u16,
    vshrq_n_u32 => test_vshrq_n_u32,
    vshrq_n_u64 => test_vshrq_n_u64,
    vrshr_n_s8 => test_vrshr_n_s8,
    vrshr_n_s16 => test_vrshr_n_s16,
    vrshr_n_s32 => test_vrshr_n_s32,
    vrshr_n_s64 => test_vrshr_n_s64,
    vrshr_n_u8 => test_vrshr_n_u8,
    vrshr_n_u16 => test_vrshr_n_u16,
    vrshr_n_u32 => test_vrshr_n_u32,
    vrshr_n_u64 => test_vrshr_n_u64,
    vrshrq_n_s8 => test_vrshrq_n_s8,
    vrshrq_n_s16 => test_vrshrq_n_s16,
    vrshrq_n_s32 => test_vrshrq_n_s32,
    vrshrq_n_s64 => test_vrshrq_n_s64,
    vrshrq_n_u8 => test_vrshrq_n_u8,
    vrshrq_n_u16 => test_vrshrq_n_u16,
    vrshrq_n_u32 => test_vrshrq_n_u32,
    vrshrq_n_u64 => test_vrshrq_n_u64,
    vshrn_n_s16 => test_vshrn_n_s16,
    vshrn_n_s32 => test_vshrn_n_s32,
    vshrn_n_s64 => test_vshrn_n_s64,
    vshrn_n_u16 => test_vshrn_n_u16,
    vshrn_n_u32 => test_vshrn_n_u32,
    vshrn_n_u64 => test_vshrn_n_u64,
    vrshrn_n_s16 => test_vrshrn_n_s16,
    vrshrn_n_s32 => test_vrshrn_n_s32,
    vrshrn_n_s64 => test_vrshrn_n_s64,
    vrshrn_n_u16 => test_vrshrn_n_u16,
    vrshrn_n_u32 => test_vrshrn_n_u32,
    vrshrn_n_u64 => test_vrshrn_n_u64,
    vqshrn_n_s16 => test_vqshrn_n_s16,
    vqshrn_n_s32 => test_vqshrn_n_s32,
    vqshrn_n_s64 => test_vqshrn_n_s64,
    vqshrn_n_u16 => test_vqshrn_n_u16,
    vqshrn_n_u32 => test_vqshrn_n_u32,
    vqshrn_n_u64 => test_vqshrn_n_u64,
    vqrshrn_n_s16 => test_vqrshrn_n_s16,
    vqrshrn_n_s32 => test_vqrshrn_n_s32,
    vqrshrn_n_s64 => test_vqrshrn_n_s64,
    vqrshrn_n_u16 => test_vqrshrn_n_u16,
    vqrshrn_n_u32 => test_vqrshrn_n_u32,
    vqrshrn_n_u64 => test_vqrshrn_n_u64,
    vqshrun_n_s16 => test_vqshrun_n_s16,
    vqshrun_n_s32 => test_vqshrun_n_s32,
    vqshrun_n_s64 => test_vqshrun_n_s64,
    vqrshrun_n_s16 => test_vqrshrun_n_s16,
    vqrshrun_n_s32 => test_vqrshrun_n_s32,
    vqrshrun_n_s64 => test_vqrshrun_n_s64,
    vshl_n_s8 => test_vshl_n_s8,
    vshl_n_s16 => test_vshl_n_s16,
    vshl_n_s32 => test_vshl_n_s32,
    vshl_n_s64 => test_vshl_n_s64,
    vshl_n_u8 => test_vshl_n_u8,
    vshl_n_u16 => test_vshl_n_u16,
    vshl_n_u32 => test_vshl_n_u32,
    vshl_n_u64 => test_vshl_n_u64,
    vshlq_n_s8 => test_vshlq_n_s8,
    vshlq_n_s16 => test_vshlq_n_s16,
    vshlq_n_s32 => test_vshlq_n_s32,
    vshlq_n_s64 => test_vshlq_n_s64,
    vshlq_n_u8 => test_vshlq_n_u8,
    vshlq_n_u16 => test_vshlq_n_u16,
    vshlq_n_u32 => test_vshlq_n_u32,
    vshlq_n_u64 => test_vshlq_n_u64,
    vqshl_n_s8 => test_vqshl_n_s8,
    vqshl_n_s16 => test_vqshl_n_s16,
    vqshl_n_s32 => test_vqshl_n_s32,
    vqshl_n_s64 => test_vqshl_n_s64,
    vqshl_n_u8 => test_vqshl_n_u8,
    vqshl_n_u16 => test_vqshl_n_u16,
    vqshl_n_u32 => test_vqshl_n_u32,
    vqshl_n_u64 => test_vqshl_n_u64,
    vqshlq_n_s8 => test_vqshlq_n_s8,
    vqshlq_n_s16 => test_vqshlq_n_s16,
    vqshlq_n_s32 => test_vqshlq_n_s32,
    vqshlq_n_s64 => test_vqshlq_n_s64,
    vqshlq_n_u8 => test_vqshlq_n_u8,
    vqshlq_n_u16 => test_vqshlq_n_u16,
    vqshlq_n_u32 => test_vqshlq_n_u32,
    vqshlq_n_u64 => test_vqshlq_n_u64,
    vqshlu_n_s8 => test_vqshlu_n_s8,
    vqshlu_n_s16 => test_vqshlu_n_s16,
    vqshlu_n_s32 => test_vqshlu_n_s32,
    vqshlu_n_s64 => test_vqshlu_n_s64,
    vqshluq_n_s8 => test_vqshluq_n_s8,
    vqshluq_n_s16 => test_vqshluq_n_s16,
    vqshluq_n_s32 => test_vqshluq_n_s32,
    vqshluq_n_s64 => test_vqshluq_n_s64,
    vshll_n_s8 => test_vshll_n_s8,
    vshll_n_s16 => test_vshll_n_s16,
    vshll_n_s32 => test_vshll_n_s32,
    vshll_n_u8 => test_vshll_n_u8,
    vshll_n_u16 => test_vshll_n_u16,
    vshll_n_u32 => test_vshll_n_u32,
    vsra_n_s8 => test_vsra_n_s8,
    vsra_n_s16 => test_vsra_n_s16,
    vsra_n_s32 => test_vsra_n_s32,
    vsra_n_s64 => test_vsra_n_s64,
    vsra_n_u8 => test_vsra_n_u8,
    vsra_n_u16 => test_vsra_n_u16,
    vsra_n_u32 => test_vsra_n_u32,
    vsra_n_u64 => test_vsra_n_u64,
    vsraq_n_s8 => test_vsraq_n_s8,
    vsraq_n_s16 => test_vsraq_n_s16,
    vsraq_n_s32 => test_vsraq_n_s32,
    vsraq_n_s64 => test_vsraq_n_s64,
    vsraq_n_u8 => test_vsraq_n_u8,
    vsraq_n_u16 => test_vsraq_n_u16,
    vsraq_n_u32 => test_vsraq_n_u32,
    vsraq_n_u64 => test_vsraq_n_u64,
    vrsra_n_s8 => test_vrsra_n_s8,
    vrsra_n_s16 => test_vrsra_n_s16,
    vrsra_n_s32 => test_vrsra_n_s32,
    vrsra_n_s64 => test_vrsra_n_s64,
    vrsra_n_u8 => test_vrsra_n_u8,
    vrsra_n_u16 => test_vrsra_n_u16,
    vrsra_n_u32 => test_vrsra_n_u32,
    vrsra_n_u64 => test_vrsra_n_u64,
    vrsraq_n_s8 => test_vrsraq_n_s8,
    vrsraq_n_s16 => test_vrsraq_n_s16,
    vrsraq_n_s32 => test_vrsraq_n_s32,
    vrsraq_n_s64 => test_vrsraq_n_s64,
    vrsraq_n_u8 => test_vrsraq_n_u8,
    vrsraq_n_u16 => test_vrsraq_n_u16,
    vrsraq_n_u32 => test_vrsraq_n_u32,
    vrsraq_n_u64 => test_vrsraq_n_u64,
    vsri_n_s8 => test_vsri_n_s8,
    vsri_n_s16 => test_vsri_n_s16,
    vsri_n_s32 => test_vsri_n_s32,
    vsri_n_s64 => test_vsri_n_s64,
    vsri_n_u8 => test_vsri_n_u8,
    vsri_n_u16 => test_vsri_n_u16,
    vsri_n_u32 => test_vsri_n_u32,
    vsri_n_u64 => test_vsri_n_u64,
    vsriq_n_s8 => test_vsriq_n_s8,
    vsriq_n_s16 => test_vsriq_n_s16,
    vsriq_n_s32 => test_vsriq_n_s32,
    vsriq_n_s64 => test_vsriq_n_s64,
    vsriq_n_u8 => test_vsriq_n_u8,
    vsriq_n_u16 => test_vsriq_n_u16,
    vsriq_n_u32 => test_vsriq_n_u32,
    vsriq_n_u64 => test_vsriq_n_u64,
    vsli_n_s8 => test_vsli_n_s8,
    vsli_n_s16 => test_vsli_n_s16,
    vsli_n_s32 => test_vsli_n_s32,
    vsli_n_s64 => test_vsli_n_s64,
    vsli_n_u8 => test_vsli_n_u8,
    vsli_n_u16 => test_vsli_n_u16,
    vsli_n_u32 => test_vsli_n_u32,
    vsli_n_u64 => test_vsli_n_u64,
    vsliq_n_s8 => test_vsliq_n_s8,
    vsliq_n_s16 => test_vsliq_n_s16,
    vsliq_n_s32 => test_vsliq_n_s32,
    vsliq_n_s64 => test_vsliq_n_s64,
    vsliq_n_u8 => test_vsliq_n_u8,
    vsliq_n_u16 => test_vsliq_n_u16,
    vsliq_n_u32 => test_vsliq_n_u32,
    vsliq_n_u64 => test_vsliq_n_u64,
    vneg_s8 => test_vneg_s8,
    vneg_s16 => test_vneg_s16,
    vneg_s32 => test_vneg_s32,
    vneg_f32 => test_vneg_f32,
    vnegq_s8 => test_vnegq_s8,
    vnegq_s16 => test_vnegq_s16,
    vnegq_s32 => test_vnegq_s32,
    vnegq_f32 => test_vnegq_f32,
    vqneg_s8 => test_vqneg_s8,
    vqneg_s16 => test_vqneg_s16,
    vqneg_s32 => test_vqneg_s32,
    vqnegq_s8 => test_vqnegq_s8,
    vqnegq_s16 => test_vqnegq_s16,
    vqnegq_s32 => test_vqnegq_s32,
    vmvn_s8 => test_vmvn_s8,
    vmvn_s16 => test_vmvn_s16,
    vmvn_s32 => test_vmvn_s32,
    vmvn_u8 => test_vmvn_u8,
    vmvn_u16 => test_vmvn_u16,
    vmvn_u32 => test_vmvn_u32,
    vmvnq_s8 => test_vmvnq_s8,
    vmvnq_s16 => test_vmvnq_s16,
    vmvnq_s32 => test_vmvnq_s32,
    vmvnq_u8 => test_vmvnq_u8,
    vmvnq_u16 => test_vmvnq_u16,
    vmvnq_u32 => test_vmvnq_u32,
    vcls_s8 => test_vcls_s8,
    vcls_s16 => test_vcls_s16,
    vcls_s32 => test_vcls_s32,
    vclsq_s8 => test_vclsq_s8,
    vclsq_s16 => test_vclsq_s16,
    vclsq_s32 => test_vclsq_s32,
    vclz_s8 => test_vclz_s8,
    vclz_s16 => test_vclz_s16,
    vclz_s32 => test_vclz_s32,
    vclz_u8 => test_vclz_u8,
    vclz_u16 => test_vclz_u16,
    vclz_u32 => test_vclz_u32,
    vclzq_s8 => test_vclzq_s8,
    vclzq_s16 => test_vclzq_s16,
    vclzq_s32 => test_vclzq_s32,
    vclzq_u8 => test_vclzq_u8,
    vclzq_u16 => test_vclzq_u16,
    vclzq_u32 => test_vclzq_u32,
    vcnt_s8 => test_vcnt_s8,
    vcnt_u8 => test_vcnt_u8,
    vcntq_s8 => test_vcntq_s8,
    vcntq_u8 => test_vcntq_u8,
    vrecpe_f32,
    vrecpe_u32,
    vrecpeq_f32,
    vrecpeq_u32,
    vrsqrte_f32,
    vrsqrte_u32,
    vrsqrteq_f32,
    vrsqrteq_u32,
    vget_lane_s8 => test_vget_lane_s8,
    vget_lane_s16 => test_vget_lane_s16,
    vget_lane_s32 => test_vget_lane_s32,
    vget_lane_f32 => test_vget_lane_f32,
    vget_lane_u8 => test_vget_lane_u8,
    vget_lane_u16 => test_vget_lane_u16,
    vget_lane_u32 => test_vget_lane_u32,
    vget_lane_s64 => test_vget_lane_s64,
    vget_lane_u64 => test_vget_lane_u64,
    vgetq_lane_s8 => test_vgetq_lane_s8,
    vgetq_lane_s16 => test_vgetq_lane_s16,
    vgetq_lane_s32 => test_vgetq_lane_s32,
    vgetq_lane_f32 => test_vgetq_lane_f32,
    vgetq_lane_u8 => test_vgetq_lane_u8,
    vgetq_lane_u16 => test_vgetq_lane_u16,
    vgetq_lane_u32 => test_vgetq_lane_u32,
    vgetq_lane_s64 => test_vgetq_lane_s64,
    vgetq_lane_u64 => test_vgetq_lane_u64,
    vset_lane_s8 => test_vset_lane_s8,
    vset_lane_s16 => test_vset_lane_s16,
    vset_lane_s32 => test_vset_lane_s32,
    vset_lane_f32 => test_vset_lane_f32,
    vset_lane_u8 => test_vset_lane_u8,
    vset_lane_u16 => test_vset_lane_u16,
    vset_lane_u32 => test_vset_lane_u32,
    vset_lane_s64 => test_vset_lane_s64,
    vset_lane_u64 => test_vset_lane_u64,
    vsetq_lane_s8 => test_vsetq_lane_s8,
    vsetq_lane_s16 => test_vsetq_lane_s16,
    vsetq_lane_s32 => test_vsetq_lane_s32,
    vsetq_lane_f32 => test_vsetq_lane_f32,
    vsetq_lane_u8 => test_vsetq_lane_u8,
    vsetq_lane_u16 => test_vsetq_lane_u16,
    vsetq_lane_u32 => test_vsetq_lane_u32,
    vsetq_lane_s64 => test_vsetq_lane_s64,
    vsetq_lane_u64 => test_vsetq_lane_u64,
    vcreate_s8 => test_vcreate_s8,
    vcreate_s16 => test_vcreate_s16,
    vcreate_s32 => test_vcreate_s32,
    vcreate_s64 => test_vcreate_s64,
    vcreate_f32 => test_vcreate_f32,
    vcreate_u8 => test_vcreate_u8,
    vcreate_u16 => test_vcreate_u16,
    vcreate_u32 => test_vcreate_u32,
    vcreate_u64 => test_vcreate_u64,
    vdup_n_s8 => test_vdup_n_s8,
    vdup_n_s16 => test_vdup_n_s16,
    vdup_n_s32 => test_vdup_n_s32,
    vdup_n_f32 => test_vdup_n_f32,
    vdup_n_u8 => test_vdup_n_u8,
    vdup_n_u16 => test_vdup_n_u16,
    vdup_n_u32 => test_vdup_n_u32,
    vdup_n_s64 => test_vdup_n_s64,
    vdup_n_u64 => test_vdup_n_u64,
    vdupq_n_s8 => test_vdupq_n_s8,
    vdupq_n_s16 => test_vdupq_n_s16,
    vdupq_n_s32 => test_vdupq_n_s32,
    vdupq_n_f32 => test_vdupq_n_f32,
    vdupq_n_u8 => test_vdupq_n_u8,
    vdupq_n_u16 => test_vdupq_n_u16,
    vdupq_n_u32 => test_vdupq_n_u32,
    vdupq_n_s64 => test_vdupq_n_s64,
    vdupq_n_u64 => test_vdupq_n_u64,
    vmov_n_s8 => test_vmov_n_s8,
    vmov_n_s16 => test_vmov_n_s16,
    vmov_n_s32 => test_vmov_n_s32,
    vmov_n_f32 => test_vmov_n_f32,
    vmov_n_u8 => test_vmov_n_u8,
    vmov_n_u16 => test_vmov_n_u16,
    vmov_n_u32 => test_vmov_n_u32,
    vmov_n_s64 => test_vmov_n_s64,
    vmov_n_u64 => test_vmov_n_u64,
    vmovq_n_s8 => test_vmovq_n_s8,
    vmovq_n_s16 => test_vmovq_n_s16,
    vmovq_n_s32 => test_vmovq_n_s32,
    vmovq_n_f32 => test_vmovq_n_f32,
    vmovq_n_u8 => test_vmovq_n_u8,
    vmovq_n_u16 => test_vmovq_n_u16,
    vmovq_n_u32 => test_vmovq_n_u32,
    vmovq_n_s64 => test_vmovq_n_s64,
    vmovq_n_u64 => test_vmovq_n_u64,
    vdup_lane_s8 => test_vdup_lane_s8,
    vdup_lane_s16 => test_vdup_lane_s16,
    vdup_lane_s32 => test_vdup_lane_s32,
    vdup_lane_f32 => test_vdup_lane_f32,
    vdup_lane_u8 => test_vdup_lane_u8,
    vdup_lane_u16 => test_vdup_lane_u16,
    vdup_lane_u32 => test_vdup_lane_u32,
    vdup_lane_s64 => test_vdup_lane_s64,
    vdup_lane_u64 => test_vdup_lane_u64,
    vdupq_lane_s8 => test_vdupq_lane_s8,
    vdupq_lane_s16 => test_vdupq_lane_s16,
    vdupq_lane_s32 => test_vdupq_lane_s32,
    vdupq_lane_f32 => test_vdupq_lane_f32,
    vdupq_lane_u8 => test_vdupq_lane_u8,
    vdupq_lane_u16 => test_vdupq_lane_u16,
    vdupq_lane_u32 => test_vdupq_lane_u32,
    vdupq_lane_s64 => test_vdupq_lane_s64,
    vdupq_lane_u64 => test_vdupq_lane_u64,
    vcombine_s8 => test_vcombine_s8,
    vcombine_s16 => test_vcombine_s16,
    vcombine_s32 => test_vcombine_s32,
    vcombine_s64 => test_vcombine_s64,
    vcombine_f32 => test_vcombine_f32,
    vcombine_u8 => test_vcombine_u8,
    vcombine_u16 => test_vcombine_u16,
    vcombine_u32 => test_vcombine_u32,
    vcombine_u64 => test_vcombine_u64,
    vget_high_s8 => test_vget_high_s8,
    vget_high_s16 => test_vget_high_s16,
    vget_high_s32 => test_vget_high_s32,
    vget_high_s64 => test_vget_high_s64,
    vget_high_f32 => test_vget_high_f32,
    vget_high_u8 => test_vget_high_u8,
    vget_high_u16 => test_vget_high_u16,
    vget_high_u32 => test_vget_high_u32,
    vget_high_u64 => test_vget_high_u64,
    vget_low_s8 => test_vget_low_s8,
    vget_low_s16 => test_vget_low_s16,
    vget_low_s32 => test_vget_low_s32,
    vget_low_f32 => test_vget_low_f32,
    vget_low_u8 => test_vget_low_u8,
    vget_low_u16 => test_vget_low_u16,
    vget_low_u32 => test_vget_low_u32,
    vget_low_s64 => test_vget_low_s64,
    vget_low_u64 => test_vget_low_u64,
    vcvt_s32_f32 => test_vcvt_s32_f32,
    vcvt_f32_s32 => test_vcvt_f32_s32,
    vcvt_f32_u32 => test_vcvt_f32_u32,
    vcvt_u32_f32 => test_vcvt_u32_f32,
    vcvtq_s32_f32 => test_vcvtq_s32_f32,
    vcvtq_f32_s32 => test_vcvtq_f32_s32,
    vcvtq_f32_u32 => test_vcvtq_f32_u32,
    vcvtq_u32_f32 => test_vcvtq_u32_f32,
    vcvt_n_s32_f32 => test_vcvt_n_s32_f32,
    vcvt_n_f32_s32 => test_vcvt_n_f32_s32,
    vcvt_n_f32_u32 => test_vcvt_n_f32_u32,
    vcvt_n_u32_f32 => test_vcvt_n_u32_f32,
    vcvtq_n_s32_f32 => test_vcvtq_n_s32_f32,
    vcvtq_n_f32_s32 => test_vcvtq_n_f32_s32,
    vcvtq_n_f32_u32 => test_vcvtq_n_f32_u32,
    vcvtq_n_u32_f32 => test_vcvtq_n_u32_f32,
    vmovn_s16 => test_vmovn_s16,
    vmovn_s32 => test_vmovn_s32,
    vmovn_s64 => test_vmovn_s64,
    vmovn_u16 => test_vmovn_u16,
    vmovn_u32 => test_vmovn_u32,
    vmovn_u64 => test_vmovn_u64,
    vqmovn_s16 => test_vqmovn_s16,
    vqmovn_s32 => test_vqmovn_s32,
    vqmovn_s64 => test_vqmovn_s64,
    vqmovn_u16 => test_vqmovn_u16,
    vqmovn_u32 => test_vqmovn_u32,
    vqmovn_u64 => test_vqmovn_u64,
    vqmovun_s16 => test_vqmovun_s16,
    vqmovun_s32 => test_vqmovun_s32,
    vqmovun_s64 => test_vqmovun_s64,
    vmovl_s8 => test_vmovl_s8,
    vmovl_s16 => test_vmovl_s16,
    vmovl_s32 => test_vmovl_s32,
    vmovl_u8 => test_vmovl_u8,
    vmovl_u16 => test_vmovl_u16,
    vmovl_u32 => test_vmovl_u32,
    vtbl1_s8 => test_vtbl1_s8,
    vtbl1_u8 => test_vtbl1_u8,
    vtbl2_s8 => test_vtbl2_s8,
    vtbl2_u8 => test_vtbl2_u8,
    vtbl3_s8 => test_vtbl3_s8,
    vtbl3_u8 => test_vtbl3_u8,
    vtbl4_s8 => test_vtbl4_s8,
    vtbl4_u8 => test_vtbl4_u8,
    vtbx1_s8 => test_vtbx1_s8,
    vtbx1_u8 => test_vtbx1_u8,
    vtbx2_s8 => test_vtbx2_s8,
    vtbx2_u8 => test_vtbx2_u8,
    vtbx3_s8 => test_vtbx3_s8,
    vtbx3_u8 => test_vtbx3_u8,
    vtbx4_s8 => test_vtbx4_s8,
    vtbx4_u8 => test_vtbx4_u8,
    vmul_lane_s16,
    vmul_lane_s32,
    vmul_lane_f32,
    vmul_lane_u16,
    vmul_lane_u32,
    vmulq_lane_s16,
    vmulq_lane_s32,
    vmulq_lane_f32,
    vmulq_lane_u16,
    vmulq_lane_u32,
    vmla_lane_s16,
    vmla_lane_s32,
    vmla_lane_f32,
    vmla_lane_u16,
    vmla_lane_u32,
    vmlaq_lane_s16,
    vmlaq_lane_s32,
    vmlaq_lane_f32,
    vmlaq_lane_u16,
    vmlaq_lane_u32,
    vmlal_lane_s16,
    vmlal_lane_s32,
    vmlal_lane_u16,
    vmlal_lane_u32,
    vqdmlal_lane_s16,
    vqdmlal_lane_s32,
    vmls_lane_s16,
    vmls_lane_s32,
    vmls_lane_f32,
    vmls_lane_u16,
    vmls_lane_u32,
    vmlsq_lane_s16,
    vmlsq_lane_s32,
    vmlsq_lane_f32,
    vmlsq_lane_u16,
    vmlsq_lane_u32,
    vmlsl_lane_s16,
    vmlsl_lane_s32,
    vmlsl_lane_u16,
    vmlsl_lane_u32,
    vqdmlsl_lane_s16,
    vqdmlsl_lane_s32,
    vmull_lane_s16,
    vmull_lane_s32,
    vmull_lane_u16,
    vmull_lane_u32,
    vqdmull_lane_s16,
    vqdmull_lane_s32,
    vqdmulhq_lane_s16,
    vqdmulhq_lane_s32,
    vqdmulh_lane_s16,
    vqdmulh_lane_s32,
    vqrdmulhq_lane_s16,
    vqrdmulhq_lane_s32,
    vqrdmulh_lane_s16,
    vqrdmulh_lane_s32,
    vqrdmlahq_lane_s16,
    vqrdmlahq_lane_s32,
    vqrdmlah_lane_s16,
    vqrdmlah_lane_s32,
    vqrdmlshq_lane_s16,
    vqrdmlshq_lane_s32,
    vqrdmlsh_lane_s16,
    vqrdmlsh_lane_s32,
    vmul_n_s16 => test_vmul_n_s16,
    vmul_n_s32 => test_vmul_n_s32,
    vmul_n_f32 => test_vmul_n_f32,
    vmul_n_u16 => test_vmul_n_u16,
    vmul_n_u32 => test_vmul_n_u32,
    vmulq_n_s16 => test_vmulq_n_s16,
    vmulq_n_s32 => test_vmulq_n_s32,
    vmulq_n_f32 => test_vmulq_n_f32,
    vmulq_n_u16 => test_vmulq_n_u16,
    vmulq_n_u32 => test_vmulq_n_u32,
    vmull_n_s16,
    vmull_n_s32,
    vmull_n_u16,
    vmull_n_u32,
    vqdmull_n_s16,
    vqdmull_n_s32,
    vqdmulhq_n_s16,
    vqdmulhq_n_s32,
    vqdmulh_n_s16,
    vqdmulh_n_s32,
    vqrdmulhq_n_s16,
    vqrdmulhq_n_s32,
    vqrdmulh_n_s16,
    vqrdmulh_n_s32,
    vmla_n_s16 => test_vmla_n_s16,
    vmla_n_s32 => test_vmla_n_s32,
    vmla_n_f32 => test_vmla_n_f32,
    vmla_n_u16 => test_vmla_n_u16,
    vmla_n_u32 => test_vmla_n_u32,
    vmlaq_n_s16 => test_vmlaq_n_s16,
    vmlaq_n_s32 => test_vmlaq_n_s32,
    vmlaq_n_f32 => test_vmlaq_n_f32,
    vmlaq_n_u16 => test_vmlaq_n_u16,
    vmlaq_n_u32 => test_vmlaq_n_u32,
    vmlal_n_s16,
    vmlal_n_s32,
    vmlal_n_u16,
    vmlal_n_u32,
    vqdmlal_n_s16,
    vqdmlal_n_s32,
    vmls_n_s16 => test_vmls_n_s16,
    vmls_n_s32 => test_vmls_n_s32,
    vmls_n_f32 => test_vmls_n_f32,
    vmls_n_u16 => test_vmls_n_u16,
    vmls_n_u32 => test_vmls_n_u32,
    vmlsq_n_s16 => test_vmlsq_n_s16,
    vmlsq_n_s32 => test_vmlsq_n_s32,
    vmlsq_n_f32 => test_vmlsq_n_f32,
    vmlsq_n_u16 => test_vmlsq_n_u16,
    vmlsq_n_u32 => test_vmlsq_n_u32,
    vmlsl_n_s16,
    vmlsl_n_s32,
    vmlsl_n_u16,
    vmlsl_n_u32,
    vqdmlsl_n_s16,
    vqdmlsl_n_s32,
    vext_s8 => test_vext_s8,
    vext_s16 => test_vext_s16,
    vext_s32 => test_vext_s32,
    vext_s64 => test_vext_s64,
    vext_f32 => test_vext_f32,
    vext_u8 => test_vext_u8,
    vext_u16 => test_vext_u16,
    vext_u32 => test_vext_u32,
    vext_u64 => test_vext_u64,
    vextq_s8 => test_vextq_s8,
    vextq_s16 => test_vextq_s16,
    vextq_s32 => test_vextq_s32,
    vextq_s64 => test_vextq_s64,
    vextq_f32 => test_vextq_f32,
    vextq_u8 => test_vextq_u8,
    vextq_u16 => test_vextq_u16,
    vextq_u32 => test_vextq_u32,
    vextq_u64 => test_vextq_u64,
    vrev64_s8 => test_vrev64_s8,
    vrev64_s16 => test_vrev64_s16,
    vrev64_s32 => test_vrev64_s32,
    vrev64_f32 => test_vrev64_f32,
    vrev64_u8 => test_vrev64_u8,
    vrev64_u16 => test_vrev64_u16,
    vrev64_u32 => test_vrev64_u32,
    vrev64q_s8 => test_vrev64q_s8,
    vrev64q_s16 => test_vrev64q_s16,
    vrev64q_s32 => test_vrev64q_s32,
    vrev64q_f32 => test_vrev64q_f32,
    vrev64q_u8 => test_vrev64q_u8,
    vrev64q_u16 => test_vrev64q_u16,
    vrev64q_u32 => test_vrev64q_u32,
    vrev32_s8 => test_vrev32_s8,
    vrev32_s16 => test_vrev32_s16,
    vrev32_u8 => test_vrev32_u8,
    vrev32_u16 => test_vrev32_u16,
    vrev32q_s8 => test_vrev32q_s8,
    vrev32q_s16 => test_vrev32q_s16,
    vrev32q_u8 => test_vrev32q_u8,
    vrev32q_u16 => test_vrev32q_u16,
    vrev16_s8 => test_vrev16_s8,
    vrev16_u8 => test_vrev16_u8,
    vrev16q_s8 => test_vrev16q_s8,
    vrev16q_u8 => test_vrev16q_u8,
    vbsl_s8 => test_vbsl_s8,
    vbsl_s16 => test_vbsl_s16,
    vbsl_s32 => test_vbsl_s32,
    vbsl_s64 => test_vbsl_s64,
    vbsl_f32 => test_vbsl_f32,
    vbsl_u8 => test_vbsl_u8,
    vbsl_u16 => test_vbsl_u16,
    vbsl_u32 => test_vbsl_u32,
    vbsl_u64 => test_vbsl_u64,
    vbslq_s8 => test_vbslq_s8,
    vbslq_s16 => test_vbslq_s16,
    vbslq_s32 => test_vbslq_s32,
    vbslq_s64 => test_vbslq_s64,
    vbslq_f32 => test_vbslq_f32,
    vbslq_u8 => test_vbslq_u8,
    vbslq_u16 => test_vbslq_u16,
    vbslq_u32 => test_vbslq_u32,
    vbslq_u64 => test_vbslq_u64,
    vtrn_s8 => test_vtrn_s8,
    vtrn_s16 => test_vtrn_s16,
    vtrn_u8 => test_vtrn_u8,
    vtrn_u16 => test_vtrn_u16,
    vtrn_s32 => test_vtrn_s32,
    vtrn_f32 => test_vtrn_f32,
    vtrn_u32 => test_vtrn_u32,
    vtrnq_s8 => test_vtrnq_s8,
    vtrnq_s16 => test_vtrnq_s16,
    vtrnq_s32 => test_vtrnq_s32,
    vtrnq_f32 => test_vtrnq_f32,
    vtrnq_u8 => test_vtrnq_u8,
    vtrnq_u16 => test_vtrnq_u16,
    vtrnq_u32 => test_vtrnq_u32,
    vzip_s8 => test_vzip_s8,
    vzip_s16 => test_vzip_s16,
    vzip_u8 => test_vzip_u8,
    vzip_u16 => test_vzip_u16,
    vzip_s32 => test_vzip_s32,
    vzip_f32 => test_vzip_f32,
    vzip_u32 => test_vzip_u32,
    vzipq_s8 => test_vzipq_s8,
    vzipq_s16 => test_vzipq_s16,
    vzipq_s32 => test_vzipq_s32,
    vzipq_f32 => test_vzipq_f32,
    vzipq_u8 => test_vzipq_u8,
    vzipq_u16 => test_vzipq_u16,
    vzipq_u32 => test_vzipq_u32,
    vuzp_s8 => test_vuzp_s8,
    vuzp_s16 => test_vuzp_s16,
    vuzp_s32 => test_vuzp_s32,
    vuzp_f32 => test_vuzp_f32,
    vuzp_u8 => test_vuzp_u8,
    vuzp_u16 => test_vuzp_u16,
    vuzp_u32 => test_vuzp_u32,
    vuzpq_s8 => test_vuzpq_s8,
    vuzpq_s16 => test_vuzpq_s16,
    vuzpq_s32 => test_vuzpq_s32,
    vuzpq_f32 => test_vuzpq_f32,
    vuzpq_u8 => test_vuzpq_u8,
    vuzpq_u16 => test_vuzpq_u16,
    vuzpq_u32 => test_vuzpq_u32,
    vld1_s8 => test_vld1_s8,
    vld1_s16 => test_vld1_s16,
    vld1_s32 => test_vld1_s32,
    vld1_s64 => test_vld1_s64,
    vld1_f32 => test_vld1_f32,
    vld1_u8 => test_vld1_u8,
    vld1_u16 => test_vld1_u16,
    vld1_u32 => test_vld1_u32,
    vld1_u64 => test_vld1_u64,
    vld1q_s8 => test_vld1q_s8,
    vld1q_s16 => test_vld1q_s16,
    vld1q_s32 => test_vld1q_s32,
    vld1q_s64 => test_vld1q_s64,
    vld1q_f32 => test_vld1q_f32,
    vld1q_u8 => test_vld1q_u8,
    vld1q_u16 => test_vld1q_u16,
    vld1q_u32 => test_vld1q_u32,
    vld1q_u64 => test_vld1q_u64,
    vld1_lane_s8 => test_vld1_lane_s8,
    vld1_lane_s16 => test_vld1_lane_s16,
    vld1_lane_s32 => test_vld1_lane_s32,
    vld1_lane_f32 => test_vld1_lane_f32,
    vld1_lane_u8 => test_vld1_lane_u8,
    vld1_lane_u16 => test_vld1_lane_u16,
    vld1_lane_u32 => test_vld1_lane_u32,
    vld1_lane_s64 => test_vld1_lane_s64,
    vld1_lane_u64 => test_vld1_lane_u64,
    vld1q_lane_s8 => test_vld1q_lane_s8,
    vld1q_lane_s16 => test_vld1q_lane_s16,
    vld1q_lane_s32 => test_vld1q_lane_s32,
    vld1q_lane_f32 => test_vld1q_lane_f32,
    vld1q_lane_u8 => test_vld1q_lane_u8,
    vld1q_lane_u16 => test_vld1q_lane_u16,
    vld1q_lane_u32 => test_vld1q_lane_u32,
    vld1q_lane_s64 => test_vld1q_lane_s64,
    vld1q_lane_u64 => test_vld1q_lane_u64,
    vld1_dup_s8 => test_vld1_dup_s8,
    vld1_dup_s16 => test_vld1_dup_s16,
    vld1_dup_s32 => test_vld1_dup_s32,
    vld1_dup_f32 => test_vld1_dup_f32,
    vld1_dup_u8 => test_vld1_dup_u8,
    vld1_dup_u16 => test_vld1_dup_u16,
    vld1_dup_u32 => test_vld1_dup_u32,
    vld1_dup_s64 => test_vld1_dup_s64,
    vld1_dup_u64 => test_vld1_dup_u64,
    vld1q_dup_s8 => test_vld1q_dup_s8,
    vld1q_dup_s16 => test_vld1q_dup_s16,
    vld1q_dup_s32 => test_vld1q_dup_s32,
    vld1q_dup_f32 => test_vld1q_dup_f32,
    vld1q_dup_u8 => test_vld1q_dup_u8,
    vld1q_dup_u16 => test_vld1q_dup_u16,
    vld1q_dup_u32 => test_vld1q_dup_u32,
    vld1q_dup_s64 => test_vld1q_dup_s64,
    vld1q_dup_u64 => test_vld1q_dup_u64,
    vst1_s8 => test_vst1_s8,
    vst1_s16 => test_vst1_s16,
    vst1_s32 => test_vst1_s32,
    vst1_s64 => test_vst1_s64,
    vst1_f32 => test_vst1_f32,
    vst1_u8 => test_vst1_u8,
    vst1_u16 => test_vst1_u16,
    vst1_u32 => test_vst1_u32,
    vst1_u64 => test_vst1_u64,
    vst1q_s8 => test_vst1q_s8,
    vst1q_s16 => test_vst1q_s16,
    vst1q_s32 => test_vst1q_s32,
    vst1q_s64 => test_vst1q_s64,
    vst1q_f32 => test_vst1q_f32,
    vst1q_u8 => test_vst1q_u8,
    vst1q_u16 => test_vst1q_u16,
    vst1q_u32 => test_vst1q_u32,
    vst1q_u64 => test_vst1q_u64,
    vst1_lane_s8 => test_vst1_lane_s8,
    vst1_lane_s16 => test_vst1_lane_s16,
    vst1_lane_s32 => test_vst1_lane_s32,
    vst1_lane_f32 => test_vst1_lane_f32,
    vst1_lane_u8 => test_vst1_lane_u8,
    vst1_lane_u16 => test_vst1_lane_u16,
    vst1_lane_u32 => test_vst1_lane_u32,
    vst1_lane_s64 => test_vst1_lane_s64,
    vst1_lane_u64 => test_vst1_lane_u64,
    vst1q_lane_s8 => test_vst1q_lane_s8,
    vst1q_lane_s16 => test_vst1q_lane_s16,
    vst1q_lane_s32 => test_vst1q_lane_s32,
    vst1q_lane_f32 => test_vst1q_lane_f32,
    vst1q_lane_u8 => test_vst1q_lane_u8,
    vst1q_lane_u16 => test_vst1q_lane_u16,
    vst1q_lane_u32 => test_vst1q_lane_u32,
    vst1q_lane_s64 => test_vst1q_lane_s64,
    vst1q_lane_u64 => test_vst1q_lane_u64,
    vld2_s8,
    vld2_s16,
    vld2_s32,
    vld2_f32,
    vld2_u8,
    vld2_u16,
    vld2_u32,
    vld2_s64,
    vld2_u64,
    vld2q_s8,
    vld2q_s16,
    vld2q_s32,
    vld2q_f32,
    vld2q_u8,
    vld2q_u16,
    vld2q_u32,
    vld2_lane_s8,
    vld2_lane_s16,
    vld2_lane_s32,
    vld2_lane_f32,
    vld2_lane_u8,
    vld2_lane_u16,
    vld2_lane_u32,
    vld2q_lane_s16,
    vld2q_lane_s32,
    vld2q_lane_f32,
    vld2q_lane_u16,
    vld2q_lane_u32,
    vld2_dup_s8,
    vld2_dup_s16,
    vld2_dup_s32,
    vld2_dup_f32,
    vld2_dup_u8,
    vld2_dup_u16,
    vld2_dup_u32,
    vld2_dup_s64,
    vld2_dup_u64,
    vst2_s8,
    vst2_s16,
    vst2_s32,
    vst2_f32,
    vst2_u8,
    vst2_u16,
    vst2_u32,
    vst2_s64,
    vst2_u64,
    vst2q_s8,
    vst2q_s16,
    vst2q_s32,
    vst2q_f32,
    vst2q_u8,
    vst2q_u16,
    vst2q_u32,
    vst2_lane_s8,
    vst2_lane_s16,
    vst2_lane_s32,
    vst2_lane_f32,
    vst2_lane_u8,
    vst2_lane_u16,
    vst2_lane_u32,
    vst2q_lane_s16,
    vst2q_lane_s32,
    vst2q_lane_f32,
    vst2q_lane_u16,
    vst2q_lane_u32,
    vld3_s8,
    vld3_s16,
    vld3_s32,
    vld3_f32,
    vld3_u8,
    vld3_u16,
    vld3_u32,
    vld3_s64,
    vld3_u64,
    vld3q_s8,
    vld3q_s16,
    vld3q_s32,
    vld3q_f32,
    vld3q_u8,
    vld3q_u16,
    vld3q_u32,
    vld3_lane_s8,
    vld3_lane_s16,
    vld3_lane_s32,
    vld3_lane_f32,
    vld3_lane_u8,
    vld3_lane_u16,
    vld3_lane_u32,
    vld3q_lane_s16,
    vld3q_lane_s32,
    vld3q_lane_f32,
    vld3q_lane_u16,
    vld3q_lane_u32,
    vld3_dup_s8,
    vld3_dup_s16,
    vld3_dup_s32,
    vld3_dup_f32,
    vld3_dup_u8,
    vld3_dup_u16,
    vld3_dup_u32,
    vld3_dup_s64,
    vld3_dup_u64,
    vst3_s8,
    vst3_s16,
    vst3_s32,
    vst3_f32,
    vst3_u8,
    vst3_u16,
    vst3_u32,
    vst3_s64,
    vst3_u64,
    vst3q_s8,
    vst3q_s16,
    vst3q_s32,
    vst3q_f32,
    vst3q_u8,
    vst3q_u16,
    vst3q_u32,
    vst3_lane_s8,
    vst3_lane_s16,
    vst3_lane_s32,
    vst3_lane_f32,
    vst3_lane_u8,
    vst3_lane_u16,
    vst3_lane_u32,
    vst3q_lane_s16,
    vst3q_lane_s32,
    vst3q_lane_f32,
    vst3q_lane_u16,
    vst3q_lane_u32,
    vld4_s8,
    vld4_s16,
    vld4_s32,
    vld4_f32,
    vld4_u8,
    vld4_u16,
    vld4_u32,
    vld4_s64,
    vld4_u64,
    vld4q_s8,
    vld4q_s16,
    vld4q_s32,
    vld4q_f32,
    vld4q_u8,
    vld4q_u16,
    vld4q_u32,
    vld4_lane_s8,
    vld4_lane_s16,
    vld4_lane_s32,
    vld4_lane_f32,
    vld4_lane_u8,
    vld4_lane_u16,
    vld4_lane_u32,
    vld4q_lane_s16,
    vld4q_lane_s32,
    vld4q_lane_f32,
    vld4q_lane_u16,
    vld4q_lane_u32,
    vld4_dup_s8,
    vld4_dup_s16,
    vld4_dup_s32,
    vld4_dup_f32,
    vld4_dup_u8,
    vld4_dup_u16,
    vld4_dup_u32,
    vld4_dup_s64,
    vld4_dup_u64,
    vst4_s8,
    vst4_s16,
    vst4_s32,
    vst4_f32,
    vst4_u8,
    vst4_u16,
    vst4_u32,
    vst4_s64,
    vst4_u64,
    vst4q_s8,
    vst4q_s16,
    vst4q_s32,
    vst4q_f32,
    vst4q_u8,
    vst4q_u16,
    vst4q_u32,
    vst4_lane_s8,
    vst4_lane_s16,
    vst4_lane_s32,
    vst4_lane_f32,
    vst4_lane_u8,
    vst4_lane_u16,
    vst4_lane_u32,
    vst4q_lane_s16,
    vst4q_lane_s32,
    vst4q_lane_f32,
    vst4q_lane_u16,
    vst4q_lane_u32,
    vand_s8 => test_vand_s8,
    vand_s16 => test_vand_s16,
    vand_s32 => test_vand_s32,
    vand_u8 => test_vand_u8,
    vand_u16 => test_vand_u16,
    vand_u32 => test_vand_u32,
    vand_s64 => test_vand_s64,
    vand_u64 => test_vand_u64,
    vandq_s8 => test_vandq_s8,
    vandq_s16 => test_vandq_s16,
    vandq_s32 => test_vandq_s32,
    vandq_s64 => test_vandq_s64,
    vandq_u8 => test_vandq_u8,
    vandq_u16 => test_vandq_u16,
    vandq_u32 => test_vandq_u32,
    vandq_u64 => test_vandq_u64,
    vorr_s8 => test_vorr_s8,
    vorr_s16 => test_vorr_s16,
    vorr_s32 => test_vorr_s32,
    vorr_u8 => test_vorr_u8,
    vorr_u16 => test_vorr_u16,
    vorr_u32 => test_vorr_u32,
    vorr_s64 => test_vorr_s64,
    vorr_u64 => test_vorr_u64,
    vorrq_s8 => test_vorrq_s8,
    vorrq_s16 => test_vorrq_s16,
    vorrq_s32 => test_vorrq_s32,
    vorrq_s64 => test_vorrq_s64,
    vorrq_u8 => test_vorrq_u8,
    vorrq_u16 => test_vorrq_u16,
    vorrq_u32 => test_vorrq_u32,
    vorrq_u64 => test_vorrq_u64,
    veor_s8 => test_veor_s8,
    veor_s16 => test_veor_s16,
    veor_s32 => test_veor_s32,
    veor_u8 => test_veor_u8,
    veor_u16 => test_veor_u16,
    veor_u32 => test_veor_u32,
    veor_s64 => test_veor_s64,
    veor_u64 => test_veor_u64,
    veorq_s8 => test_veorq_s8,
    veorq_s16 => test_veorq_s16,
    veorq_s32 => test_veorq_s32,
    veorq_s64 => test_veorq_s64,
    veorq_u8 => test_veorq_u8,
    veorq_u16 => test_veorq_u16,
    veorq_u32 => test_veorq_u32,
    veorq_u64 => test_veorq_u64,
    vbic_s8 => test_vbic_s8,
    vbic_s16 => test_vbic_s16,
    vbic_s32 => test_vbic_s32,
    vbic_u8 => test_vbic_u8,
    vbic_u16 => test_vbic_u16,
    vbic_u32 => test_vbic_u32,
    vbic_s64 => test_vbic_s64,
    vbic_u64 => test_vbic_u64,
    vbicq_s8 => test_vbicq_s8,
    vbicq_s16 => test_vbicq_s16,
    vbicq_s32 => test_vbicq_s32,
    vbicq_s64 => test_vbicq_s64,
    vbicq_u8 => test_vbicq_u8,
    vbicq_u16 => test_vbicq_u16,
    vbicq_u32 => test_vbicq_u32,
    vbicq_u64 => test_vbicq_u64,
    vorn_s8 => test_vorn_s8,
    vorn_s16 => test_vorn_s16,
    vorn_s32 => test_vorn_s32,
    vorn_u8 => test_vorn_u8,
    vorn_u16 => test_vorn_u16,
    vorn_u32 => test_vorn_u32,
    vorn_s64 => test_vorn_s64,
    vorn_u64 => test_vorn_u64,
    vornq_s8 => test_vornq_s8,
    vornq_s16 => test_vornq_s16,
    vornq_s32 => test_vornq_s32,
    vornq_s64 => test_vornq_s64,
    vornq_u8 => test_vornq_u8,
    vornq_u16 => test_vornq_u16,
    vornq_u32 => test_vornq_u32,
    vornq_u64 => test_vornq_u64,
    vreinterpret_f32_s64 => test_vreinterpret_f32_s64,
    vreinterpret_f32_u64 => test_vreinterpret_f32_u64,
    vreinterpret_f32_s8 => test_vreinterpret_f32_s8,
    vreinterpret_f32_s16 => test_vreinterpret_f32_s16,
    vreinterpret_f32_s32 => test_vreinterpret_f32_s32,
    vreinterpret_f32_u8 => test_vreinterpret_f32_u8,
    vreinterpret_f32_u16 => test_vreinterpret_f32_u16,
    vreinterpret_f32_u32 => test_vreinterpret_f32_u32,
    vreinterpret_s64_f32 => test_vreinterpret_s64_f32,
    vreinterpret_s64_u64 => test_vreinterpret_s64_u64,
    vreinterpret_s64_s8 => test_vreinterpret_s64_s8,
    vreinterpret_s64_s16 => test_vreinterpret_s64_s16,
    vreinterpret_s64_s32 => test_vreinterpret_s64_s32,
    vreinterpret_s64_u8 => test_vreinterpret_s64_u8,
    vreinterpret_s64_u16 => test_vreinterpret_s64_u16,
    vreinterpret_s64_u32 => test_vreinterpret_s64_u32,
    vreinterpret_u64_f32 => test_vreinterpret_u64_f32,
    vreinterpret_u64_s64 => test_vreinterpret_u64_s64,
    vreinterpret_u64_s8 => test_vreinterpret_u64_s8,
    vreinterpret_u64_s16 => test_vreinterpret_u64_s16,
    vreinterpret_u64_s32 => test_vreinterpret_u64_s32,
    vreinterpret_u64_u8 => test_vreinterpret_u64_u8,
    vreinterpret_u64_u16 => test_vreinterpret_u64_u16,
    vreinterpret_u64_u32 => test_vreinterpret_u64_u32,
    vreinterpret_s8_f32 => test_vreinterpret_s8_f32,
    vreinterpret_s8_s64 => test_vreinterpret_s8_s64,
    vreinterpret_s8_u64 => test_vreinterpret_s8_u64,
    vreinterpret_s8_s16 => test_vreinterpret_s8_s16,
    vreinterpret_s8_s32 => test_vreinterpret_s8_s32,
    vreinterpret_s8_u8 => test_vreinterpret_s8_u8,
    vreinterpret_s8_u16 => test_vreinterpret_s8_u16,
    vreinterpret_s8_u32 => test_vreinterpret_s8_u32,
    vreinterpret_s16_f32 => test_vreinterpret_s16_f32,
    vreinterpret_s16_s64 => test_vreinterpret_s16_s64,
    vreinterpret_s16_u64 => test_vreinterpret_s16_u64,
    vreinterpret_s16_s8 => test_vreinterpret_s16_s8,
    vreinterpret_s16_s32 => test_vreinterpret_s16_s32,
    vreinterpret_s16_u8 => test_vreinterpret_s16_u8,
    vreinterpret_s16_u16 => test_vreinterpret_s16_u16,
    vreinterpret_s16_u32 => test_vreinterpret_s16_u32,
    vreinterpret_s32_f32 => test_vreinterpret_s32_f32,
    vreinterpret_s32_s64 => test_vreinterpret_s32_s64,
    vreinterpret_s32_u64 => test_vreinterpret_s32_u64,
    vreinterpret_s32_s8 => test_vreinterpret_s32_s8,
    vreinterpret_s32_s16 => test_vreinterpret_s32_s16,
    vreinterpret_s32_u8 => test_vreinterpret_s32_u8,
    vreinterpret_s32_u16 => test_vreinterpret_s32_u16,
    vreinterpret_s32_u32 => test_vreinterpret_s32_u32,
    vreinterpret_u8_f32 => test_vreinterpret_u8_f32,
    vreinterpret_u8_s64 => test_vreinterpret_u8_s64,
    vreinterpret_u8_u64 => test_vreinterpret_u8_u64,
    vreinterpret_u8_s8 => test_vreinterpret_u8_s8,
    vreinterpret_u8_s16 => test_vreinterpret_u8_s16,
    vreinterpret_u8_s32 => test_vreinterpret_u8_s32,
    vreinterpret_u8_u16 => test_vreinterpret_u8_u16,
    vreinterpret_u8_u32 => test_vreinterpret_u8_u32,
    vreinterpret_u16_f32 => test_vreinterpret_u16_f32,
    vreinterpret_u16_s64 => test_vreinterpret_u16_s64,
    vreinterpret_u16_u64 => test_vreinterpret_u16_u64,
    vreinterpret_u16_s8 => test_vreinterpret_u16_s8,
    vreinterpret_u16_s16 => test_vreinterpret_u16_s16,
    vreinterpret_u16_s32 => test_vreinterpret_u16_s32,
    vreinterpret_u16_u8 => test_vreinterpret_u16_u8,
    vreinterpret_u16_u32 => test_vreinterpret_u16_u32,
    vreinterpret_u32_f32 => test_vreinterpret_u32_f32,
    vreinterpret_u32_s64 => test_vreinterpret_u32_s64,
    vreinterpret_u32_u64 => test_vreinterpret_u32_u64,
    vreinterpret_u32_s8 => test_vreinterpret_u32_s8,
    vreinterpret_u32_s16 => test_vreinterpret_u32_s16,
    vreinterpret_u32_s32 => test_vreinterpret_u32_s32,
    vreinterpret_u32_u8 => test_vreinterpret_u32_u8,
    vreinterpret_u32_u16 => test_vreinterpret_u32_u16,
    vreinterpretq_f32_s64 => test_vreinterpretq_f32_s64,
    vreinterpretq_f32_u64 => test_vreinterpretq_f32_u64,
    vreinterpretq_f32_s8 => test_vreinterpretq_f32_s8,
    vreinterpretq_f32_s16 => test_vreinterpretq_f32_s16,
    vreinterpretq_f32_s32 => test_vreinterpretq_f32_s32,
    vreinterpretq_f32_u8 => test_vreinterpretq_f32_u8,
    vreinterpretq_f32_u16 => test_vreinterpretq_f32_u16,
    vreinterpretq_f32_u32 => test_vreinterpretq_f32_u32,
    vreinterpretq_s64_f32 => test_vreinterpretq_s64_f32,
    vreinterpretq_s64_u64 => test_vreinterpretq_s64_u64,
    vreinterpretq_s64_s8 => test_vreinterpretq_s64_s8,
    vreinterpretq_s64_s16 => test_vreinterpretq_s64_s16,
    vreinterpretq_s64_s32 => test_vreinterpretq_s64_s32,
    vreinterpretq_s64_u8 => test_vreinterpretq_s64_u8,
    vreinterpretq_s64_u16 => test_vreinterpretq_s64_u16,
    vreinterpretq_s64_u32 => test_vreinterpretq_s64_u32,
    vreinterpretq_u64_f32 => test_vreinterpretq_u64_f32,
    vreinterpretq_u64_s64 => test_vreinterpretq_u64_s64,
    vreinterpretq_u64_s8 => test_vreinterpretq_u64_s8,
    vreinterpretq_u64_s16 => test_vreinterpretq_u64_s16,
    vreinterpretq_u64_s32 => test_vreinterpretq_u64_s32,
    vreinterpretq_u64_u8 => test_vreinterpretq_u64_u8,
    vreinterpretq_u64_u16 => test_vreinterpretq_u64_u16,
    vreinterpretq_u64_u32 => test_vreinterpretq_u64_u32,
    vreinterpretq_s8_f32 => test_vreinterpretq_s8_f32,
    vreinterpretq_s8_s64 => test_vreinterpretq_s8_s64,
    vreinterpretq_s8_u64 => test_vreinterpretq_s8_u64,
    vreinterpretq_s8_s16 => test_vreinterpretq_s8_s16,
    vreinterpretq_s8_s32 => test_vreinterpretq_s8_s32,
    vreinterpretq_s8_u8 => test_vreinterpretq_s8_u8,
    vreinterpretq_s8_u16 => test_vreinterpretq_s8_u16,
    vreinterpretq_s8_u32 => test_vreinterpretq_s8_u32,
    vreinterpretq_s16_f32 => test_vreinterpretq_s16_f32,
    vreinterpretq_s16_s64 => test_vreinterpretq_s16_s64,
    vreinterpretq_s16_u64 => test_vreinterpretq_s16_u64,
    vreinterpretq_s16_s8 => test_vreinterpretq_s16_s8,
    vreinterpretq_s16_s32 => test_vreinterpretq_s16_s32,
    vreinterpretq_s16_u8 => test_vreinterpretq_s16_u8,
    vreinterpretq_s16_u16 => test_vreinterpretq_s16_u16,
    vreinterpretq_s16_u32 => test_vreinterpretq_s16_u32,
    vreinterpretq_s32_f32 => test_vreinterpretq_s32_f32,
    vreinterpretq_s32_s64 => test_vreinterpretq_s32_s64,
    vreinterpretq_s32_u64 => test_vreinterpretq_s32_u64,
    vreinterpretq_s32_s8 => test_vreinterpretq_s32_s8,
    vreinterpretq_s32_s16 => test_vreinterpretq_s32_s16,
    vreinterpretq_s32_u8 => test_vreinterpretq_s32_u8,
    vreinterpretq_s32_u16 => test_vreinterpretq_s32_u16,
    vreinterpretq_s32_u32 => test_vreinterpretq_s32_u32,
    vreinterpretq_u8_f32 => test_vreinterpretq_u8_f32,
    vreinterpretq_u8_s64 => test_vreinterpretq_u8_s64,
    vreinterpretq_u8_u64 => test_vreinterpretq_u8_u64,
    vreinterpretq_u8_s8 => test_vreinterpretq_u8_s8,
    vreinterpretq_u8_s16 => test_vreinterpretq_u8_s16,
    vreinterpretq_u8_s32 => test_vreinterpretq_u8_s32,
    vreinterpretq_u8_u16 => test_vreinterpretq_u8_u16,
    vreinterpretq_u8_u32 => test_vreinterpretq_u8_u32,
    vreinterpretq_u16_f32 => test_vreinterpretq_u16_f32,
    vreinterpretq_u16_s64 => test_vreinterpretq_u16_s64,
    vreinterpretq_u16_u64 => test_vreinterpretq_u16_u64,
    vreinterpretq_u16_s8 => test_vreinterpretq_u16_s8,
    vreinterpretq_u16_s16 => test_vreinterpretq_u16_s16,
    vreinterpretq_u16_s32 => test_vreinterpretq_u16_s32,
    vreinterpretq_u16_u8 => test_vreinterpretq_u16_u8,
    vreinterpretq_u16_u32 => test_vreinterpretq_u16_u32,
    vreinterpretq_u32_f32 => test_vreinterpretq_u32_f32,
    vreinterpretq_u32_s64 => test_vreinterpretq_u32_s64,
    vreinterpretq_u32_u64 => test_vreinterpretq_u32_u64,
    vreinterpretq_u32_s8 => test_vreinterpretq_u32_s8,
    vreinterpretq_u32_s16 => test_vreinterpretq_u32_s16,
    vreinterpretq_u32_s32 => test_vreinterpretq_u32_s32,
    vreinterpretq_u32_u8 => test_vreinterpretq_u32_u8,
    vreinterpretq_u32_u16 => test_vreinterpretq_u32_u16,
    vaeseq_u8,
    vaesdq_u8,
    vaesmcq_u8,
    vaesimcq_u8,
    vsha1h_u32,
    vsha1cq_u32,
    vsha1pq_u32,
    vsha1mq_u32,
    vsha1su0q_u32,
    vsha1su1q_u32,
    vsha256hq_u32,
    vsha256h2q_u32,
    vsha256su0q_u32,
    vsha256su1q_u32,
    vdot_u32,
    vdotq_u32,
    vdot_s32,
    vdotq_s32,
    vdot_lane_u32,
    vdotq_lane_u32,
    vdot_lane_s32,
    vdotq_lane_s32,
    vdot_laneq_u32,
    vdotq_laneq_u32,
    vdot_laneq_s32,
    vdotq_laneq_s32,
    vcadd_rot90_f32,
    vcaddq_rot90_f32,
    vcadd_rot270_f32,
    vcaddq_rot270_f32,
    vcmla_f32,
    vcmlaq_f32,
    vcmla_lane_f32,
    vcmla_laneq_f32,
    vcmlaq_lane_f32,
    vcmlaq_laneq_f32,
    vcmla_rot90_f32,
    vcmlaq_rot90_f32,
    vcmla_rot90_lane_f32,
    vcmla_rot90_laneq_f32,
    vcmlaq_rot90_lane_f32,
    vcmlaq_rot90_laneq_f32,
    vcmla_rot180_f32,
    vcmlaq_rot180_f32,
    vcmla_rot180_lane_f32,
    vcmla_rot180_laneq_f32,
    vcmlaq_rot180_lane_f32,
    vcmlaq_rot180_laneq_f32,
    vcmla_rot270_f32,
    vcmlaq_rot270_f32,
    vcmla_rot270_lane_f32,
    vcmla_rot270_laneq_f32,
    vcmlaq_rot270_lane_f32,
    vcmlaq_rot270_laneq_f32,
    vusdot_s32,
    vusdotq_s32,
    vusdot_lane_s32,
    vusdotq_lane_s32,
    vsudot_lane_s32,
    vsudotq_lane_s32,
    vusdot_laneq_s32,
    vusdotq_laneq_s32,
    vsudot_laneq_s32,
    vsudotq_laneq_s32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::Fixture;
    use std::collections::HashSet;

    #[test]
    fn test_catalogue_size() {
        assert_eq!(Instruction::COUNT, 1741);
        assert_eq!(ENTRIES.len(), Instruction::COUNT);
    }

    #[test]
    fn test_indices_follow_catalogue_order() {
        for (i, &instruction) in Instruction::ALL.iter().enumerate() {
            assert_eq!(instruction.index(), i);
        }
        assert_eq!(Instruction::ALL[0], Instruction::vadd_s8);
    }

    #[test]
    fn test_names_are_unique_and_resolve() {
        let mut seen = HashSet::new();
        for &instruction in Instruction::ALL {
            assert!(seen.insert(instruction.name()), "{}", instruction);
            assert_eq!(Instruction::from_name(instruction.name()), Ok(instruction));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            Instruction::from_name("vfoo_s8"),
            Err(unknown_instruction("vfoo_s8"))
        );
        assert!("all".parse::<Instruction>().is_err());
        assert_eq!("vaddq_s8".parse(), Ok(Instruction::vaddq_s8));
    }

    #[test]
    fn test_placeholders_skip() {
        let fx = Fixture::new(0);
        assert!(!Instruction::vrecpe_f32.is_implemented());
        assert_eq!(Instruction::vrecpe_f32.test()(&fx), Outcome::Unimplemented);
        assert!(Instruction::vadd_s8.is_implemented());
    }

    #[test]
    fn test_implemented_share() {
        let implemented = Instruction::ALL
            .iter()
            .filter(|i| i.is_implemented())
            .count();
        assert_eq!(implemented, 1324);
    }
}
