//! Encoding lengths, flag bits and curve constants of BN254 G2.
use ark_bn254::Fq2;
use ark_ff::MontFp;

/// Base field element length.
pub const FQ_LEN: usize = 32;

/// Quadratic extension field element length (Fq2).
pub const FQ2_LEN: usize = 2 * FQ_LEN;

/// Uncompressed G2 point length (x, y coordinates).
pub const G2_UNCOMPRESSED_LEN: usize = 2 * FQ2_LEN;

/// Compressed G2 point length (x coordinate and flags).
pub const G2_COMPRESSED_LEN: usize = FQ2_LEN;

/// Scalar length of precompile inputs.
pub const SCALAR_LEN: usize = 32;

/// Number of bits of the subgroup order `r`.
pub const SCALAR_BITS: u64 = 254;

/// Mask of the flag bits in the leading byte of an encoding.
pub const FLAG_MASK: u8 = 0b11 << 6;

/// Uncompressed encoding. Canonical field elements never have these bits set.
pub const FLAG_UNCOMPRESSED: u8 = 0b00 << 6;

/// Compressed encoding of the point at infinity.
pub const FLAG_COMPRESSED_INFINITY: u8 = 0b01 << 6;

/// Compressed encoding, `y` is the lexicographically smallest root.
pub const FLAG_COMPRESSED_SMALLEST: u8 = 0b10 << 6;

/// Compressed encoding, `y` is the lexicographically largest root.
pub const FLAG_COMPRESSED_LARGEST: u8 = 0b11 << 6;

// Big-endian non-Montgomery form.
/// Base field modulus `p`.
pub const MODULUS_REPR: [u8; FQ_LEN] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x97, 0x81, 0x6a, 0x91, 0x68, 0x71, 0xca, 0x8d, 0x3c, 0x20, 0x8c, 0x16, 0xd8, 0x7c, 0xfd, 0x47,
];

// Big-endian non-Montgomery form.
/// Prime order `r` of the G2 subgroup.
pub const SUBGROUP_ORDER_REPR: [u8; SCALAR_LEN] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x28, 0x33, 0xe8, 0x48, 0x79, 0xb9, 0x70, 0x91, 0x43, 0xe1, 0xf5, 0x93, 0xf0, 0x00, 0x00, 0x01,
];

/// The BN parameter `t` the curve is generated from.
pub const BN_PARAM: u64 = 4965661367192848881;

/// `b' = 3 / (9 + u)`, the constant of the twist `y² = x³ + b'`.
pub(crate) const TWIST_B: Fq2 = Fq2::new(
    MontFp!("19485874751759354771024239261021720505790618469301721065564631296452457478373"),
    MontFp!("266929791119991161246907387137283842545076965332900288569378510910307636690"),
);

/// `(9 + u)^((p - 1) / 3)`, applied to `x̄` by the untwist-Frobenius-twist endomorphism.
pub(crate) const PSI_COEFF_X: Fq2 = Fq2::new(
    MontFp!("21575463638280843010398324269430826099269044274347216827212613867836435027261"),
    MontFp!("10307601595873709700152284273816112264069230130616436755625194854815875713954"),
);

/// `(9 + u)^((p - 1) / 2)`, applied to `ȳ` by the untwist-Frobenius-twist endomorphism.
pub(crate) const PSI_COEFF_Y: Fq2 = Fq2::new(
    MontFp!("2821565182194536844548159561693502659359617185244120367078079554186484126554"),
    MontFp!("3505843767911556378687030309984248845540243509899259641013678093033130930403"),
);

/// `x` coordinate of the EIP-197 generator.
pub(crate) const GENERATOR_X: Fq2 = Fq2::new(
    MontFp!("10857046999023057135944570762232829481370756359578518086990519993285655852781"),
    MontFp!("11559732032986387107991004021392285783925812861821192530917403151452391805634"),
);

/// `y` coordinate of the EIP-197 generator.
pub(crate) const GENERATOR_Y: Fq2 = Fq2::new(
    MontFp!("8495653923123431417604973247489272438418190587263600148770280649306958101930"),
    MontFp!("4082367875863433681332203403145435568316851327593401208105741076214120093531"),
);
