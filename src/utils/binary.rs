// Tue Oct 13 2026 - Alex

pub struct BinaryUtils;

impl BinaryUtils {
    pub fn read_u8(data: &[u8], offset: usize) -> Option<u8> {
        data.get(offset).copied()
    }

    pub fn read_u16_le(data: &[u8], offset: usize) -> Option<u16> {
        let bytes = Self::read_array::<2>(data, offset)?;
        Some(u16::from_le_bytes(bytes))
    }

    pub fn read_u16_be(data: &[u8], offset: usize) -> Option<u16> {
        let bytes = Self::read_array::<2>(data, offset)?;
        Some(u16::from_be_bytes(bytes))
    }

    pub fn read_u32_be(data: &[u8], offset: usize) -> Option<u32> {
        let bytes = Self::read_array::<4>(data, offset)?;
        Some(u32::from_be_bytes(bytes))
    }

    pub fn read_bytes(data: &[u8], offset: usize, len: usize) -> Option<&[u8]> {
        let end = offset.checked_add(len)?;
        data.get(offset..end)
    }

    fn read_array<const N: usize>(data: &[u8], offset: usize) -> Option<[u8; N]> {
        let slice = Self::read_bytes(data, offset, N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_endianness() {
        let data = [0x12, 0x34, 0x56, 0x78];
        assert_eq!(BinaryUtils::read_u16_be(&data, 0), Some(0x1234));
        assert_eq!(BinaryUtils::read_u16_le(&data, 0), Some(0x3412));
        assert_eq!(BinaryUtils::read_u32_be(&data, 0), Some(0x12345678));
    }

    #[test]
    fn test_read_out_of_bounds() {
        let data = [0u8; 4];
        assert_eq!(BinaryUtils::read_u32_be(&data, 1), None);
        assert_eq!(BinaryUtils::read_u8(&data, 4), None);
        assert_eq!(BinaryUtils::read_bytes(&data, usize::MAX, 2), None);
        assert_eq!(BinaryUtils::read_bytes(&data, 2, 2), Some(&data[2..4]));
    }
}
